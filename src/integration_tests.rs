//! Integration tests for the Nova client
//!
//! These tests exercise full workflows across multiple modules to ensure
//! proper integration between the channel protocol, event processing,
//! conversation state, and the message rendering pipeline.

use crossbeam_channel::unbounded;

use crate::conversation::{Role, HISTORY_ASSISTANT_PREFIX, HISTORY_USER_PREFIX};
use crate::events::process_events;
use crate::input_state::InputState;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::{ClientState, GREETING, REQUEST_ERROR_MESSAGE};
use crate::ui::messages::{format_inline, segment_content, InlineUnit, Segment};

/// Full round trip: user types, message goes over the action channel,
/// the backend answers over the event channel, state reflects the reply.
#[test]
fn test_send_reply_round_trip() {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();
    let mut state = ClientState::new();
    let mut input = InputState::new();

    input.message_input = "Como crio um ruleset?".into();
    let text = input.take_message().unwrap();
    state.push_message(Role::User, text.clone());
    action_tx
        .send(BackendAction::SendMessage {
            text,
            conversation_id: state.conversation.conversation_id.clone(),
        })
        .unwrap();
    state.awaiting_reply = true;

    // Stand-in for the backend loop: consume the action, answer it.
    match action_rx.try_recv().unwrap() {
        BackendAction::SendMessage {
            text,
            conversation_id,
        } => {
            assert_eq!(text, "Como crio um ruleset?");
            assert!(conversation_id.is_none());
            event_tx
                .send(GuiEvent::ReplyReceived {
                    response: "Crie um ruleset no Builder.".into(),
                    conversation_id: "conv-1".into(),
                })
                .unwrap();
        }
        other => panic!("unexpected action: {other:?}"),
    }

    process_events(&event_rx, &mut state);

    assert!(!state.awaiting_reply);
    assert_eq!(state.conversation.conversation_id.as_deref(), Some("conv-1"));
    assert_eq!(state.conversation.messages.len(), 2);
    assert_eq!(state.conversation.messages[1].role, Role::Assistant);
    assert_eq!(state.conversation.messages[1].content, "Crie um ruleset no Builder.");
}

/// A failed request surfaces the generic error bubble, a toast, and a
/// system log line, and clears the pending flag.
#[test]
fn test_request_failure_flow() {
    let (event_tx, event_rx) = unbounded::<GuiEvent>();
    let mut state = ClientState::new();
    state.awaiting_reply = true;

    event_tx
        .send(GuiEvent::RequestFailed("HTTP 502 Bad Gateway".into()))
        .unwrap();
    process_events(&event_rx, &mut state);

    assert!(!state.awaiting_reply);
    assert_eq!(state.conversation.messages.len(), 1);
    assert_eq!(state.conversation.messages[0].content, REQUEST_ERROR_MESSAGE);
    assert_eq!(state.status_messages.len(), 1);
    assert!(state.system_log.iter().any(|l| l.contains("502")));
}

/// Restoring a stored conversation replaces the transcript with the
/// parsed history lines in order.
#[test]
fn test_history_restore_flow() {
    let (event_tx, event_rx) = unbounded::<GuiEvent>();
    let mut state = ClientState::new();
    state.seed_greeting();

    event_tx
        .send(GuiEvent::HistoryLoaded {
            conversation_id: "conv-7".into(),
            history: vec![
                format!("{HISTORY_USER_PREFIX}O que é o Blaze Advisor?"),
                format!("{HISTORY_ASSISTANT_PREFIX}É um motor de regras de negócio."),
                "linha sem prefixo é ignorada".into(),
            ],
        })
        .unwrap();
    process_events(&event_rx, &mut state);

    assert_eq!(state.conversation.conversation_id.as_deref(), Some("conv-7"));
    assert_eq!(state.conversation.messages.len(), 2);
    assert_eq!(state.conversation.messages[0].role, Role::User);
    assert_eq!(state.conversation.messages[1].role, Role::Assistant);
    assert_eq!(state.status_messages.len(), 1);
}

/// Starting a new conversation resets the transcript, drops the stored
/// id, and seeds the greeting again.
#[test]
fn test_new_conversation_resets_state() {
    let mut state = ClientState::new();
    state.seed_greeting();
    state.conversation.conversation_id = Some("conv-3".into());
    state.push_message(Role::User, "oi".into());

    state.new_conversation();

    assert!(state.conversation.conversation_id.is_none());
    assert_eq!(state.conversation.messages.len(), 1);
    assert_eq!(state.conversation.messages[0].content, GREETING);
}

/// An assistant reply containing fenced SRL flows through segmentation
/// exactly as the renderer consumes it.
#[test]
fn test_reply_segmentation_pipeline() {
    let (event_tx, event_rx) = unbounded::<GuiEvent>();
    let mut state = ClientState::new();

    let reply = "Use uma regra assim:\n```srl\nif the score of the applicant is at least 700 then approve .\n```\nIsso resolve o caso.";
    event_tx
        .send(GuiEvent::ReplyReceived {
            response: reply.into(),
            conversation_id: "conv-9".into(),
        })
        .unwrap();
    process_events(&event_rx, &mut state);

    let segments = segment_content(&state.conversation.messages[0].content);
    assert_eq!(segments.len(), 3);
    match &segments[1] {
        Segment::Code {
            language,
            display_label,
            code,
        } => {
            assert_eq!(language, "java");
            assert_eq!(display_label, "SRL");
            assert!(code.contains("at least 700"));
        }
        other => panic!("expected code segment, got {other:?}"),
    }
    match &segments[2] {
        Segment::Text { raw } => assert_eq!(raw, "\nIsso resolve o caso."),
        other => panic!("expected text segment, got {other:?}"),
    }
}

/// Inline formatting applies within a text segment produced by the
/// segmenter, keeping the two passes composable.
#[test]
fn test_inline_formatting_on_text_segment() {
    let segments = segment_content("Defina `applicant` antes de usar.");
    let Segment::Text { raw } = &segments[0] else {
        panic!("expected text segment");
    };
    let units = format_inline(raw);
    assert_eq!(
        units,
        vec![
            InlineUnit::Plain("Defina ".into()),
            InlineUnit::Code("applicant".into()),
            InlineUnit::Plain(" antes de usar.".into()),
        ]
    );
}

/// The copy capability receives the exact code text of the block.
#[test]
fn test_copy_capability_receives_exact_code() {
    let segments = segment_content("```python\nprint(\"ok\")\n```");
    let mut copied: Vec<String> = Vec::new();
    let mut copy = |code: &str| copied.push(code.to_string());

    for segment in &segments {
        if let Segment::Code { code, .. } = segment {
            copy(code);
        }
    }

    assert_eq!(copied, vec!["print(\"ok\")\n"]);
}
