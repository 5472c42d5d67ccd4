// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events to top-level messages: window close requests and
//! file drops are always handled; keyboard shortcuts are only translated
//! when no widget captured the event, so typing in future text inputs will
//! not trigger slide selection.

use super::{KeyAction, Message};
use crate::tour::SlideIndex;
use iced::{event, keyboard, window, Subscription};

/// Creates the application's event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored
                && !modifiers.command()
                && !modifiers.alt() =>
        {
            key_action(&key).map(|action| Message::Key {
                action,
                window: window_id,
            })
        }
        _ => None,
    })
}

/// Maps a pressed key to its action, if any.
fn key_action(key: &keyboard::Key) -> Option<KeyAction> {
    match key {
        keyboard::Key::Named(named) => match named {
            keyboard::key::Named::ArrowRight => Some(KeyAction::NextSlide),
            keyboard::key::Named::ArrowLeft => Some(KeyAction::PreviousSlide),
            keyboard::key::Named::Home | keyboard::key::Named::Escape => {
                Some(KeyAction::Overview)
            }
            keyboard::key::Named::F11 => Some(KeyAction::ToggleFullscreen),
            _ => None,
        },
        keyboard::Key::Character(c) => match c.as_str() {
            "0" => Some(KeyAction::Overview),
            digit => digit
                .parse::<u32>()
                .ok()
                .filter(|n| (1..=9).contains(n))
                .and_then(SlideIndex::new)
                .map(KeyAction::Slide),
        },
        keyboard::Key::Unidentified => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    #[test]
    fn digits_one_to_nine_select_slides() {
        for n in 1..=9u32 {
            let key = character(&n.to_string());
            assert_eq!(
                key_action(&key),
                Some(KeyAction::Slide(SlideIndex::new(n).unwrap()))
            );
        }
    }

    #[test]
    fn zero_home_and_escape_reset_to_overview() {
        assert_eq!(key_action(&character("0")), Some(KeyAction::Overview));
        assert_eq!(
            key_action(&keyboard::Key::Named(keyboard::key::Named::Home)),
            Some(KeyAction::Overview)
        );
        assert_eq!(
            key_action(&keyboard::Key::Named(keyboard::key::Named::Escape)),
            Some(KeyAction::Overview)
        );
    }

    #[test]
    fn arrows_step_and_f11_toggles_fullscreen() {
        assert_eq!(
            key_action(&keyboard::Key::Named(keyboard::key::Named::ArrowRight)),
            Some(KeyAction::NextSlide)
        );
        assert_eq!(
            key_action(&keyboard::Key::Named(keyboard::key::Named::ArrowLeft)),
            Some(KeyAction::PreviousSlide)
        );
        assert_eq!(
            key_action(&keyboard::Key::Named(keyboard::key::Named::F11)),
            Some(KeyAction::ToggleFullscreen)
        );
    }

    #[test]
    fn letters_and_other_keys_are_ignored() {
        assert_eq!(key_action(&character("a")), None);
        assert_eq!(key_action(&character("10")), None);
        assert_eq!(
            key_action(&keyboard::Key::Named(keyboard::key::Named::Space)),
            None
        );
    }
}
