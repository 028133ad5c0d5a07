//! Concrete widgets.

mod masked_slot_field;
mod text_edit;

pub use masked_slot_field::{FramePaints, MaskedSlotField, SlotGeometry};
pub use text_edit::{EditAction, TextEdit};
