//! Startup intro overlay: logo, product line, then fade into the app.
//!
//! Mirrors the product's launch sequence - a pulsing logo for 1.5 s, the
//! title and tagline until 3.0 s, then a half-second fade.

use std::time::Instant;

use eframe::egui::{self, Align2, Color32, RichText, Stroke};

use crate::ui::theme::{self, NovaTheme};

const LOGO_PHASE_SECS: f32 = 1.5;
const TEXT_PHASE_SECS: f32 = 3.0;
const FADE_SECS: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Logo,
    Text,
    Fading,
    Done,
}

/// Pick the phase for a given elapsed wall-clock time.
fn phase_at(elapsed_secs: f32) -> IntroPhase {
    if elapsed_secs < LOGO_PHASE_SECS {
        IntroPhase::Logo
    } else if elapsed_secs < TEXT_PHASE_SECS {
        IntroPhase::Text
    } else if elapsed_secs < TEXT_PHASE_SECS + FADE_SECS {
        IntroPhase::Fading
    } else {
        IntroPhase::Done
    }
}

pub struct IntroEffect {
    started: Instant,
}

impl IntroEffect {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn phase(&self) -> IntroPhase {
        phase_at(self.started.elapsed().as_secs_f32())
    }

    pub fn is_done(&self) -> bool {
        self.phase() == IntroPhase::Done
    }

    /// Overlay opacity for the current phase (1.0 opaque, 0.0 gone).
    fn opacity(&self) -> f32 {
        match self.phase() {
            IntroPhase::Logo | IntroPhase::Text => 1.0,
            IntroPhase::Fading => {
                let into_fade = self.started.elapsed().as_secs_f32() - TEXT_PHASE_SECS;
                (1.0 - into_fade / FADE_SECS).clamp(0.0, 1.0)
            }
            IntroPhase::Done => 0.0,
        }
    }

    /// Paint the overlay above everything else.
    pub fn render(&self, ctx: &egui::Context, theme: &NovaTheme) {
        let opacity = self.opacity();
        if opacity <= 0.0 {
            return;
        }

        // Full-window backdrop
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("intro_backdrop"),
        ));
        painter.rect_filled(
            ctx.screen_rect(),
            0.0,
            theme.background.gamma_multiply(opacity),
        );

        // Pulsing ring around the logo
        let center = ctx.screen_rect().center() - egui::vec2(0.0, 40.0);
        let t = ctx.input(|i| i.time) as f32;
        let pulse = 34.0 + 6.0 * (t * 3.0).sin();
        painter.circle_stroke(
            center,
            pulse,
            Stroke::new(2.0, theme.accent.gamma_multiply(0.5 * opacity)),
        );

        egui::Area::new(egui::Id::new("intro_content"))
            .order(egui::Order::Foreground)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                ui.vertical_centered(|ui| {
                    theme::render_avatar(ui, "Nova", 56.0, theme.accent);
                    ui.add_space(16.0);

                    if self.phase() != IntroPhase::Logo {
                        ui.label(
                            RichText::new("Nova Assistant")
                                .size(22.0)
                                .strong()
                                .color(Color32::WHITE),
                        );
                        ui.label(
                            RichText::new("Seu assistente inteligente para FICO Blaze Advisor")
                                .size(13.0)
                                .color(theme.text_secondary),
                        );
                        ui.add_space(12.0);
                        ui.add(egui::Spinner::new().size(20.0).color(theme.accent));
                    }
                });
            });

        // Keep the animation moving
        ctx.request_repaint();
    }
}

impl Default for IntroEffect {
    fn default() -> Self {
        Self::new()
    }
}
