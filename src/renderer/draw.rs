//! Draw list generation
//!
//! Turns a simulation frame into an ordered list of commands. The list is
//! painted back to front.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::text::{FontSource, TextAnchor, TextStyle, score_text};
use crate::consts::{BLACK, WHITE};
use crate::settings::Settings;
use crate::sim::{FrameEvents, Rect};

/// Background image key for the ocean scene
pub const OCEAN_BACKGROUND: &str = "water_background";

/// One thing for the renderer to paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole screen
    Clear { color: [u8; 3] },
    /// Image scaled to cover the screen
    Background { key: String, size: IVec2 },
    /// Image blitted at the rectangle's top-left
    Sprite { key: String, rect: Rect },
    Text {
        text: String,
        anchor: TextAnchor,
        style: TextStyle,
    },
}

impl DrawCommand {
    pub fn sprite_key(&self) -> Option<&str> {
        match self {
            DrawCommand::Sprite { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Static layout of the ocean screen
#[derive(Debug, Clone)]
pub struct Hud {
    world: IVec2,
    background: String,
    target_sprite: String,
    instructions: String,
    instructions_style: TextStyle,
    score_style: TextStyle,
}

impl Hud {
    pub fn new(settings: &Settings) -> Self {
        Self {
            world: IVec2::new(settings.world_width, settings.world_height),
            background: OCEAN_BACKGROUND.to_string(),
            target_sprite: settings.target_sprite.clone(),
            instructions: settings.variant.instructions().to_string(),
            instructions_style: TextStyle::new(18, WHITE),
            score_style: TextStyle::new(32, WHITE),
        }
    }

    pub fn target_sprite(&self) -> &str {
        &self.target_sprite
    }

    /// Background, player, target, instructions, score
    pub fn draw_list(&self, frame: &FrameEvents) -> Vec<DrawCommand> {
        vec![
            DrawCommand::Background {
                key: self.background.clone(),
                size: self.world,
            },
            DrawCommand::Sprite {
                key: frame.frame_key.clone(),
                rect: frame.player,
            },
            DrawCommand::Sprite {
                key: self.target_sprite.clone(),
                rect: frame.target,
            },
            DrawCommand::Text {
                text: self.instructions.clone(),
                anchor: TextAnchor::Center(IVec2::new(self.world.x / 2, self.world.y - 10)),
                style: self.instructions_style.clone(),
            },
            score_line(frame.score, &self.score_style),
        ]
    }
}

fn score_line(score: u64, style: &TextStyle) -> DrawCommand {
    DrawCommand::Text {
        text: score_text(score),
        anchor: TextAnchor::TopLeft(IVec2::new(10, 10)),
        style: style.clone(),
    }
}

/// Black screen with the score in the corner
pub fn score_screen(score: u64) -> Vec<DrawCommand> {
    vec![
        DrawCommand::Clear { color: BLACK },
        score_line(score, &TextStyle::new(32, WHITE)),
    ]
}

/// Black screen with one line of text centred in a `world`-sized screen
pub fn title_screen(text: &str, font: FontSource, world: IVec2) -> Vec<DrawCommand> {
    vec![
        DrawCommand::Clear { color: BLACK },
        DrawCommand::Text {
            text: text.to_string(),
            anchor: TextAnchor::Center(world / 2),
            style: TextStyle::new(48, WHITE).with_font(font),
        },
    ]
}
