use bitflags::bitflags;
use serde::{de::Visitor, Deserialize, Serialize};

bitflags! {
    /// Represents the state of modifier keys. Bits match the X11 key-button mask.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ModMask: u16 {
        /// Used as the zero value
        const Zero = 0;
        const Shift = 1;
        const Lock = 1 << 1;
        const Control = 1 << 2;
        /// Mod1
        const Alt = 1 << 3;
        /// Mod2
        const NumLock = 1 << 4;
        const Mod3 = 1 << 5;
        /// Mod4
        const Super = 1 << 6;
        const Mod5 = 1 << 7;
    }
}
bitflags! {
    /// Represents the state of the mouse buttons
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct Button: u8 {
        /// Used as the zero value
        const Zero = 0;
        /// Main button (left click for right-handed)
        const Button1 = 1;
        /// Middle button (pressing the scroll wheel)
        const Button2 = 1 << 1;
        /// Secondary button (right click for right-handed)
        const Button3 = 1 << 2;
        /// Scroll wheel up
        const Button4 = 1 << 3;
        /// Scroll wheel down
        const Button5 = 1 << 4;
    }
}

impl ModMask {
    /// Drops the lock modifiers so bindings match whatever the state of Caps and Num Lock.
    #[must_use]
    pub fn clean(self) -> Self {
        self.difference(Self::NumLock | Self::Lock)
    }
}

impl Button {
    /// The button for an X11 button number.
    #[must_use]
    pub const fn from_number(number: u32) -> Self {
        match number {
            1 => Self::Button1,
            2 => Self::Button2,
            3 => Self::Button3,
            4 => Self::Button4,
            5 => Self::Button5,
            _ => Self::Zero,
        }
    }

    /// The X11 button number, zero when no single button is set.
    #[must_use]
    pub fn number(self) -> u32 {
        [
            Self::Button1,
            Self::Button2,
            Self::Button3,
            Self::Button4,
            Self::Button5,
        ]
        .iter()
        .position(|button| *button == self)
        .map_or(0, |index| index as u32 + 1)
    }
}

#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    let mut mask = ModMask::Zero;
    for s in keys {
        mask |= into_mod(s);
    }
    mask.clean()
}

#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "Shift" => ModMask::Shift,
        "Control" => ModMask::Control,
        "Mod1" | "Alt" => ModMask::Alt,
        "Mod3" => ModMask::Mod3,
        "Mod4" | "Super" => ModMask::Super,
        "Mod5" => ModMask::Mod5,
        _ => ModMask::Zero,
    }
}

// serde impls (derive is not working with the bitflags macro)

impl Serialize for ModMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for ModMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ModmaskVisitor;

        impl Visitor<'_> for ModmaskVisitor {
            type Value = ModMask;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a bitfield on 16 bits")
            }

            fn visit_u8<E>(self, v: u8) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ModMask::from_bits_retain(u16::from(v)))
            }

            fn visit_u16<E>(self, v: u16) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ModMask::from_bits_retain(v))
            }
        }

        deserializer.deserialize_u16(ModmaskVisitor)
    }
}

impl Serialize for Button {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for Button {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ButtonVisitor;

        impl Visitor<'_> for ButtonVisitor {
            type Value = Button;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a bitfield on 8 bits")
            }

            fn visit_u8<E>(self, v: u8) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Button::from_bits_retain(v))
            }
        }

        deserializer.deserialize_u8(ButtonVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_names_combine_into_one_mask() {
        let keys = vec!["Mod1".to_owned(), "Shift".to_owned(), "Mod2".to_owned()];
        assert_eq!(into_modmask(&keys), ModMask::Alt | ModMask::Shift);
    }

    #[test]
    fn lock_modifiers_are_cleaned() {
        let mask = ModMask::Super | ModMask::Lock | ModMask::NumLock;
        assert_eq!(mask.clean(), ModMask::Super);
    }

    #[test]
    fn buttons_map_to_their_x11_numbers() {
        assert_eq!(Button::from_number(3), Button::Button3);
        assert_eq!(Button::Button3.number(), 3);
        assert_eq!(Button::from_number(9), Button::Zero);
    }
}
