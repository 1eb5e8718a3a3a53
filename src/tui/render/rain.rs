use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::tui::theme::Theme;

/// Render the falling-dot background into empty cells only.
///
/// Runs after the content widgets so text always wins: a dot is written
/// only where the cell still holds a plain space. Each column animates
/// from a hash of its x position, so a given (column, tick) pair always
/// produces the same drops and renders stay reproducible.
pub fn render_rain(buf: &mut Buffer, area: Rect, theme: &Theme, tick: u64) {
    let height = area.height as u64;
    if height == 0 {
        return;
    }
    let span = height + 8;

    for x in area.left()..area.right() {
        let seed = column_seed(x);
        // Leave roughly a third of the columns dry
        if seed % 3 == 0 {
            continue;
        }
        let speed = 1 + (seed >> 8) % 3;
        let head = (seed % span + tick / speed) % span;

        // Head plus a two-cell fading tail
        for offset in 0..3u64 {
            let Some(y) = head.checked_sub(offset) else {
                continue;
            };
            if y >= height {
                continue;
            }
            let cell = &mut buf[(x, area.top() + y as u16)];
            if cell.symbol() == " " {
                cell.set_symbol("\u{00B7}").set_fg(theme.rain);
            }
        }
    }
}

fn column_seed(x: u16) -> u64 {
    let mut h = (x as u64).wrapping_add(0x9E37_79B9_7F4A_7C15);
    h ^= h >> 33;
    h = h.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    h ^= h >> 33;
    h
}
