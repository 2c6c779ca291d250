//! Fire-and-forget presentation requests raised by the dispatcher.
//!
//! Nothing in the core reads these back; a front end drains and renders them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectColor {
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Orange,
    Gold,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualEffect {
    FloatingText { text: String, color: EffectColor },
    ScreenShake,
    Particles { color: EffectColor },
}

impl VisualEffect {
    pub fn text(text: impl Into<String>, color: EffectColor) -> Self {
        VisualEffect::FloatingText {
            text: text.into(),
            color,
        }
    }

    /// The floating text, if this is a text effect.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            VisualEffect::FloatingText { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Pending effects in emission order.
#[derive(Debug, Default)]
pub struct EffectQueue {
    pending: Vec<VisualEffect>,
}

impl EffectQueue {
    pub fn push(&mut self, effect: VisualEffect) {
        self.pending.push(effect);
    }

    pub fn text(&mut self, text: impl Into<String>, color: EffectColor) {
        self.push(VisualEffect::text(text, color));
    }

    pub fn drain(&mut self) -> Vec<VisualEffect> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
