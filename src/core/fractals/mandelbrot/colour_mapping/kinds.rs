use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MandelbrotColourMapKinds {
    #[default]
    EscapeBands,
    FireGradient,
    BlueWhiteGradient,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[
        Self::EscapeBands,
        Self::FireGradient,
        Self::BlueWhiteGradient,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::EscapeBands => "Escape bands",
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }

    /// The kind after this one in `ALL`, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&kind| kind == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_every_kind() {
        let mut kind = MandelbrotColourMapKinds::default();
        let mut seen = Vec::new();

        for _ in 0..MandelbrotColourMapKinds::ALL.len() {
            seen.push(kind);
            kind = kind.next();
        }

        assert_eq!(kind, MandelbrotColourMapKinds::default());
        assert_eq!(seen, MandelbrotColourMapKinds::ALL);
    }

    #[test]
    fn deserializes_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: MandelbrotColourMapKinds,
        }

        let wrapper: Wrapper = toml::from_str("kind = \"blue-white-gradient\"").unwrap();

        assert_eq!(wrapper.kind, MandelbrotColourMapKinds::BlueWhiteGradient);
    }
}
