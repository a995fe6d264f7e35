//! Statement segmentation.
//!
//! Cuts the flat program body between `BEGIN` and `END.` into one
//! instruction string per top-level statement, keeping program order and
//! the source offset of each instruction.

pub mod segmenter;
