//! Screen layouts
//!
//! Text layout mirrors the pager UI: a small status font on the top line,
//! a large message font below. Messages longer than one large-font line
//! wrap onto a second line; 20 characters always fit.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use heapless::String;

use taplink_protocol::MAX_MESSAGE_LEN;

/// Characters per line in the large message font (128 px / 10 px)
const MESSAGE_LINE_LEN: usize = 12;

/// What a node wants on its display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Idle banner (node-specific title)
    Ready,
    /// Composer entry screen: active mode plus the buffer so far
    Status {
        numeric_mode: bool,
        text: String<MAX_MESSAGE_LEN>,
    },
    /// Received message, in progress or final
    Message(String<MAX_MESSAGE_LEN>),
}

/// Render a screen onto a cleared target
///
/// `ready_title` is the node's idle banner ("Sender Ready" / "Pager Ready").
pub fn draw_screen<D>(target: &mut D, screen: &Screen, ready_title: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    let small = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let large = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);

    match screen {
        Screen::Ready => {
            Text::with_baseline(ready_title, Point::new(0, 12), small, Baseline::Top)
                .draw(target)?;
        }
        Screen::Status { numeric_mode, text } => {
            let mode = if *numeric_mode { "NUM MODE" } else { "TXT MODE" };
            Text::with_baseline(mode, Point::new(0, 0), small, Baseline::Top).draw(target)?;
            draw_message_lines(target, text, large)?;
        }
        Screen::Message(text) => {
            draw_message_lines(target, text, large)?;
        }
    }

    Ok(())
}

/// Draw message text in the large font, wrapped at the line width
fn draw_message_lines<D>(
    target: &mut D,
    text: &str,
    style: MonoTextStyle<'_, BinaryColor>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let (first, rest) = if text.len() > MESSAGE_LINE_LEN {
        text.split_at(MESSAGE_LINE_LEN)
    } else {
        (text, "")
    };

    Text::with_baseline(first, Point::new(0, 20), style, Baseline::Top).draw(target)?;
    if !rest.is_empty() {
        Text::with_baseline(rest, Point::new(0, 42), style, Baseline::Top).draw(target)?;
    }

    Ok(())
}
