//! Letters of the notation, their letter types, and ending configurations.
//!
//! Every pictograph is labelled with one letter.  Placement depends on it
//! twice: the letter itself can appear as a key suffix, and the letter's
//! type decides whether that suffix is spelled `_W-` or `_W_dash`.
//!
//! | Type    | Name         | Letters                          |
//! |---------|--------------|----------------------------------|
//! | `Type1` | Dual-Shift   | `A`–`V`                          |
//! | `Type2` | Shift        | `W X Y Z Σ Δ θ Ω`                |
//! | `Type3` | Cross-Shift  | `W- X- Y- Z- Σ- Δ- θ- Ω-`        |
//! | `Type4` | Dash         | `Φ Ψ Λ`                          |
//! | `Type5` | Dual-Dash    | `Φ- Ψ- Λ-`                       |
//! | `Type6` | Static       | `α β Γ`                          |

token_enum! {
    /// One letter of the notation, spelled by its glyph.
    pub enum Letter ("letter") {
        A => "A", B => "B", C => "C", D => "D", E => "E", F => "F",
        G => "G", H => "H", I => "I", J => "J", K => "K", L => "L",
        M => "M", N => "N", O => "O", P => "P", Q => "Q", R => "R",
        S => "S", T => "T", U => "U", V => "V",
        W => "W", X => "X", Y => "Y", Z => "Z",
        Sigma => "Σ", Delta => "Δ", Theta => "θ", Omega => "Ω",
        WDash => "W-", XDash => "X-", YDash => "Y-", ZDash => "Z-",
        SigmaDash => "Σ-", DeltaDash => "Δ-", ThetaDash => "θ-", OmegaDash => "Ω-",
        Phi => "Φ", Psi => "Ψ", Lambda => "Λ",
        PhiDash => "Φ-", PsiDash => "Ψ-", LambdaDash => "Λ-",
        Alpha => "α", Beta => "β", Gamma => "Γ",
    }
}

token_enum! {
    /// Letter families grouped by the motions they contain.
    pub enum LetterType ("letter type") {
        Type1 => "Type1",
        Type2 => "Type2",
        Type3 => "Type3",
        Type4 => "Type4",
        Type5 => "Type5",
        Type6 => "Type6",
    }
}

impl LetterType {
    /// Human-readable family name.
    pub fn description(self) -> &'static str {
        match self {
            LetterType::Type1 => "Dual-Shift",
            LetterType::Type2 => "Shift",
            LetterType::Type3 => "Cross-Shift",
            LetterType::Type4 => "Dash",
            LetterType::Type5 => "Dual-Dash",
            LetterType::Type6 => "Static",
        }
    }

    /// `true` for the letter types whose placement-key suffix drops the
    /// trailing `-` and appends `_dash` instead.
    #[inline]
    pub fn is_dash_suffixed(self) -> bool {
        matches!(self, LetterType::Type3 | LetterType::Type5)
    }
}

token_enum! {
    /// How the two props sit relative to each other at the end of a beat.
    ///
    /// Alpha: props at opposite hand points.  Beta: same hand point.
    /// Gamma: adjacent hand points.
    pub enum PropConfigurationClass ("prop configuration") {
        Alpha => "alpha",
        Beta  => "beta",
        Gamma => "gamma",
        None  => "none",
    }
}

impl Default for PropConfigurationClass {
    fn default() -> Self {
        PropConfigurationClass::None
    }
}

impl PropConfigurationClass {
    /// The key tag for this class, or `None` when no class applies.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            PropConfigurationClass::None => None,
            other                        => Some(other.as_str()),
        }
    }
}

impl Letter {
    /// The letter type this letter belongs to.
    pub fn letter_type(self) -> LetterType {
        use Letter::*;
        match self {
            A | B | C | D | E | F | G | H | I | J | K | L | M | N | O | P | Q | R | S | T
            | U | V => LetterType::Type1,
            W | X | Y | Z | Sigma | Delta | Theta | Omega => LetterType::Type2,
            WDash | XDash | YDash | ZDash | SigmaDash | DeltaDash | ThetaDash | OmegaDash => {
                LetterType::Type3
            }
            Phi | Psi | Lambda => LetterType::Type4,
            PhiDash | PsiDash | LambdaDash => LetterType::Type5,
            Alpha | Beta | Gamma => LetterType::Type6,
        }
    }

    /// The glyph with its last character removed (`"W-"` → `"W"`).
    ///
    /// Works on characters, not bytes, so Greek glyphs truncate correctly.
    pub fn truncated(self) -> &'static str {
        let mut chars = self.as_str().chars();
        chars.next_back();
        chars.as_str()
    }

    /// Prop configuration the letter ends in.
    ///
    /// Every letter of the notation belongs to exactly one of the three
    /// ending groups, so this never returns `PropConfigurationClass::None`.
    pub fn ending_configuration(self) -> PropConfigurationClass {
        use Letter::*;
        match self {
            A | B | C | D | E | F | W | X | WDash | XDash | Phi | PhiDash | Alpha => {
                PropConfigurationClass::Alpha
            }
            G | H | I | J | K | L | Y | Z | YDash | ZDash | Psi | PsiDash | Beta => {
                PropConfigurationClass::Beta
            }
            M | N | O | P | Q | R | S | T | U | V | Sigma | Delta | Theta | Omega
            | SigmaDash | DeltaDash | ThetaDash | OmegaDash | Lambda | LambdaDash | Gamma => {
                PropConfigurationClass::Gamma
            }
        }
    }
}
