use sweeper_core::{MenuButton, MenuTitle, Mode, Snapshot, TileSprite};

pub fn sprite_char(sprite: TileSprite) -> char {
    match sprite {
        TileSprite::Hidden => '#',
        TileSprite::Flagged => 'F',
        TileSprite::Mine => '*',
        TileSprite::Number(0) => '.',
        TileSprite::Number(count) => char::from_digit(u32::from(count), 10).unwrap_or('?'),
    }
}

fn title_text(title: MenuTitle) -> &'static str {
    match title {
        MenuTitle::Start => "New game",
        MenuTitle::Paused => "Paused",
        MenuTitle::Lost => "Game over",
        MenuTitle::Won => "You win!",
    }
}

fn button_text(button: MenuButton) -> &'static str {
    match button {
        MenuButton::Continue => "Continue",
        MenuButton::Settings => "Settings",
        MenuButton::Quit => "Quit",
    }
}

/// Board as text, top row first, with the menu underneath while paused.
pub fn text(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for row in snapshot.rows_top_down() {
        out.extend(row.iter().map(|&sprite| sprite_char(sprite)));
        out.push('\n');
    }

    if snapshot.mode() == Mode::Menu {
        out.push_str(&format!("-- {} --\n", title_text(snapshot.title)));
        for button in &snapshot.buttons {
            out.push_str(&format!(
                "  {}) {}\n",
                button.kind.slot() + 1,
                button_text(button.kind)
            ));
        }
    }
    out
}

pub fn json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string(snapshot)
}
