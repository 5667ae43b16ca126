//! Animatable properties
//!
//! Every visual effect in the engine reduces to a numeric write of one of
//! these properties on one element. Rendering (if any) happens elsewhere; the
//! engine only produces `(element, property, value)` triples through the
//! [`Stage`](crate::stage::Stage) trait.

/// A numeric visual property a tween can drive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    /// Horizontal translation in pixels
    TranslateX,
    /// Vertical translation in pixels
    TranslateY,
    /// Uniform scale factor (1.0 = natural size)
    Scale,
    /// Rotation in degrees
    Rotation,
    /// Opacity in [0, 1]
    Opacity,
    /// Top clip inset as a fraction of element height (1.0 = fully masked)
    ClipInset,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::TranslateX,
        Property::TranslateY,
        Property::Scale,
        Property::Rotation,
        Property::Opacity,
        Property::ClipInset,
    ];

    /// The value of this property on an untouched element
    pub fn identity(self) -> f32 {
        match self {
            Property::TranslateX | Property::TranslateY | Property::Rotation => 0.0,
            Property::Scale | Property::Opacity => 1.0,
            Property::ClipInset => 0.0,
        }
    }

    fn index(self) -> usize {
        match self {
            Property::TranslateX => 0,
            Property::TranslateY => 1,
            Property::Scale => 2,
            Property::Rotation => 3,
            Property::Opacity => 4,
            Property::ClipInset => 5,
        }
    }
}

/// Current property values for one element
///
/// Dense storage: every element carries all six values, initialized to their
/// identities, so reads never miss.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertySet {
    values: [f32; 6],
}

impl Default for PropertySet {
    fn default() -> Self {
        Self::identity()
    }
}

impl PropertySet {
    /// All properties at their identity values
    pub fn identity() -> Self {
        let mut values = [0.0; 6];
        for prop in Property::ALL {
            values[prop.index()] = prop.identity();
        }
        Self { values }
    }

    pub fn get(&self, prop: Property) -> f32 {
        self.values[prop.index()]
    }

    pub fn set(&mut self, prop: Property, value: f32) {
        self.values[prop.index()] = value;
    }
}
