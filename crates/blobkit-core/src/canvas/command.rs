//! Edits applied to a [`Canvas`]

use super::{BlobConfig, Canvas, PlacedBlob, ROTATION_STEP};
use crate::style::Color;
use crate::{Error, Result};

/// Rotation direction for [`CanvasCommand::Rotate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

impl RotateDirection {
    fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// A single edit to the canvas document
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCommand {
    /// Append a blob at the canvas centre
    Add(BlobConfig),
    /// Remove the blob at `index` and clear the selection
    Delete(usize),
    /// Turn a blob by one [`ROTATION_STEP`]
    Rotate {
        index: usize,
        direction: RotateDirection,
    },
    /// Move a blob's centre
    Move { index: usize, x: f64, y: f64 },
    /// Set a blob's uniform scale
    Scale { index: usize, scale: f64 },
    /// Toggle selection of a blob
    Select(usize),
    SetBackground(Color),
    /// Set the blur of the blob layer; negative values clamp to 0
    SetBlur(f64),
}

impl Canvas {
    /// Apply one edit
    ///
    /// Commands addressing a missing blob fail with [`Error::BlobNotFound`]
    /// and leave the canvas untouched.
    pub fn apply(&mut self, command: CanvasCommand) -> Result<()> {
        tracing::debug!(?command, "Applying canvas command");
        match command {
            CanvasCommand::Add(blob) => {
                self.blobs.push(PlacedBlob {
                    x: f64::from(self.width) / 2.0,
                    y: f64::from(self.height) / 2.0,
                    ..PlacedBlob::centered(blob)
                });
            }
            CanvasCommand::Delete(index) => {
                self.check_index(index)?;
                self.blobs.remove(index);
                self.selected = None;
            }
            CanvasCommand::Rotate { index, direction } => {
                self.blob_mut(index)?.rotation += ROTATION_STEP * direction.sign();
            }
            CanvasCommand::Move { index, x, y } => {
                let blob = self.blob_mut(index)?;
                blob.x = x;
                blob.y = y;
            }
            CanvasCommand::Scale { index, scale } => {
                self.blob_mut(index)?.scale = scale;
            }
            CanvasCommand::Select(index) => {
                self.check_index(index)?;
                self.selected = if self.selected == Some(index) {
                    None
                } else {
                    Some(index)
                };
            }
            CanvasCommand::SetBackground(color) => self.background = color,
            CanvasCommand::SetBlur(blur) => self.blur = blur.max(0.0),
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.blobs.len() {
            Ok(())
        } else {
            Err(Error::BlobNotFound {
                index,
                count: self.blobs.len(),
            })
        }
    }

    fn blob_mut(&mut self, index: usize) -> Result<&mut PlacedBlob> {
        let count = self.blobs.len();
        self.blobs
            .get_mut(index)
            .ok_or(Error::BlobNotFound { index, count })
    }
}
