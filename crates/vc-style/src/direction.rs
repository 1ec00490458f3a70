#![forbid(unsafe_code)]

//! Direction-dependent presentation.

use vc_i18n::Direction;

use crate::class_list::StyleDescriptor;

/// Horizontal flip for decorative backgrounds.
pub const MIRROR_X: StyleDescriptor = StyleDescriptor::new("scale-x-[-1]");

/// Mirroring class for backgrounds that point toward the reading start.
#[must_use]
pub const fn mirror_for(direction: Direction) -> StyleDescriptor {
    match direction {
        Direction::Rtl => MIRROR_X,
        Direction::Ltr => StyleDescriptor::EMPTY,
    }
}

/// Physical text alignment of the reading start.
#[must_use]
pub const fn text_start(direction: Direction) -> StyleDescriptor {
    match direction {
        Direction::Rtl => StyleDescriptor::new("text-right"),
        Direction::Ltr => StyleDescriptor::new("text-left"),
    }
}
