//! Decoded genome document

use super::{Error, LAYER_COUNT, Layer, Result};

/// Structured form of an encoding: five layers bottom-most first, plus a frame offset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Layers in painter's order, index 0 drawn first
    pub layers: [Layer; LAYER_COUNT],
    /// Circular shift applied to every layer's cells
    pub frame: u8,
}

impl Document {
    /// Create a document from a fixed set of layers
    #[must_use]
    pub const fn new(layers: [Layer; LAYER_COUNT], frame: u8) -> Self {
        Self { layers, frame }
    }

    /// Create a document from a layer list, which must hold exactly five layers
    pub fn from_layers(layers: Vec<Layer>, frame: u8) -> Result<Self> {
        let got = layers.len();
        let layers: [Layer; LAYER_COUNT] =
            layers.try_into().map_err(|_| Error::LayerCount {
                expected: LAYER_COUNT,
                got,
            })?;
        Ok(Self { layers, frame })
    }

    /// Same document at another frame
    #[must_use]
    pub const fn with_frame(mut self, frame: u8) -> Self {
        self.frame = frame;
        self
    }

    /// Layers that can produce cells, with their index, in painter's order
    pub fn visible_layers(&self) -> impl Iterator<Item = (usize, &Layer)> {
        self.layers
            .iter()
            .enumerate()
            .filter(|(_, layer)| !layer.is_hidden())
    }

    /// Check every layer's fields fit the wire format
    pub fn validate(&self) -> Result<()> {
        self.layers.iter().try_for_each(Layer::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_layers_requires_five() {
        let err = Document::from_layers(vec![Layer::default(); 3], 0).unwrap_err();
        assert_eq!(
            err,
            Error::LayerCount {
                expected: LAYER_COUNT,
                got: 3
            }
        );

        let doc = Document::from_layers(vec![Layer::default(); LAYER_COUNT], 7).unwrap();
        assert_eq!(doc.frame, 7);
    }

    #[test]
    fn test_visible_layers_keeps_order() {
        let mut doc = Document::default();
        doc.layers[1].visible = false;
        doc.layers[3].colors = [0, 0];

        let indices: Vec<usize> = doc.visible_layers().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2, 4]);
    }

    #[test]
    fn test_validate_reports_first_bad_layer() {
        let mut doc = Document::default();
        doc.layers[2].colors = [0, 20];
        assert!(matches!(
            doc.validate(),
            Err(Error::FieldOutOfRange {
                field: "colors[1]",
                value: 20,
                ..
            })
        ));
    }
}
