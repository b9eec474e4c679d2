//! Resolves key names used in the configuration into X keysyms.
use x11_dl::keysym;

pub type XKeysym = u32;

/// Looks up a keysym by its X name (`Return`, `q`, `F5`, ...).
#[must_use]
pub fn into_keysym(key: &str) -> Option<XKeysym> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        // Printable Latin-1 keysyms share their code with the character.
        return c.is_ascii_graphic().then(|| u32::from(c));
    }
    let sym = match key {
        "Return" => keysym::XK_Return,
        "space" => keysym::XK_space,
        "Tab" => keysym::XK_Tab,
        "Escape" => keysym::XK_Escape,
        "BackSpace" => keysym::XK_BackSpace,
        "Delete" => keysym::XK_Delete,
        "Insert" => keysym::XK_Insert,
        "Home" => keysym::XK_Home,
        "End" => keysym::XK_End,
        "Prior" | "Page_Up" => keysym::XK_Prior,
        "Next" | "Page_Down" => keysym::XK_Next,
        "Left" => keysym::XK_Left,
        "Right" => keysym::XK_Right,
        "Up" => keysym::XK_Up,
        "Down" => keysym::XK_Down,
        "Print" => keysym::XK_Print,
        "minus" => keysym::XK_minus,
        "equal" => keysym::XK_equal,
        "comma" => keysym::XK_comma,
        "period" => keysym::XK_period,
        "slash" => keysym::XK_slash,
        "semicolon" => keysym::XK_semicolon,
        "apostrophe" => keysym::XK_apostrophe,
        "grave" => keysym::XK_grave,
        "backslash" => keysym::XK_backslash,
        "bracketleft" => keysym::XK_bracketleft,
        "bracketright" => keysym::XK_bracketright,
        "F1" => keysym::XK_F1,
        "F2" => keysym::XK_F2,
        "F3" => keysym::XK_F3,
        "F4" => keysym::XK_F4,
        "F5" => keysym::XK_F5,
        "F6" => keysym::XK_F6,
        "F7" => keysym::XK_F7,
        "F8" => keysym::XK_F8,
        "F9" => keysym::XK_F9,
        "F10" => keysym::XK_F10,
        "F11" => keysym::XK_F11,
        "F12" => keysym::XK_F12,
        _ => return None,
    };
    Some(sym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_characters_resolve_to_their_latin1_keysym() {
        assert_eq!(into_keysym("q"), Some(keysym::XK_q));
        assert_eq!(into_keysym("1"), Some(keysym::XK_1));
    }

    #[test]
    fn named_keys_resolve() {
        assert_eq!(into_keysym("Return"), Some(keysym::XK_Return));
        assert_eq!(into_keysym("F12"), Some(keysym::XK_F12));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(into_keysym("NotAKey"), None);
        assert_eq!(into_keysym(""), None);
    }
}
