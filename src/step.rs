#![doc = r#"
Steps and the fixed 16-step measure

Every track in a `.splice` file carries exactly one measure of
[`MEASURE_LEN`] steps. On disk each step is a byte; `1` means the
instrument sounds, anything else means silence.

```text
|x---|x---|x---|x---|
 ^^^^ one group of GROUP_LEN steps
```
"#]

use core::fmt;

use num_enum::{FromPrimitive, IntoPrimitive};

/// Number of steps in a measure.
pub const MEASURE_LEN: usize = 16;

/// Number of steps rendered between two bars.
pub const GROUP_LEN: usize = 4;

/// One position in a measure.
///
/// Converting from a byte never fails: `1` is [`Step::Hit`], every other
/// value is [`Step::Rest`].
///
/// # Example
/// ```rust
/// # use splice_drum::prelude::*;
/// assert_eq!(Step::from(1), Step::Hit);
/// assert_eq!(Step::from(0), Step::Rest);
/// assert_eq!(Step::from(0x7F), Step::Rest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Step {
    /// Silence
    #[num_enum(default)]
    Rest = 0,
    /// The instrument sounds
    Hit = 1,
}

impl Step {
    /// True if the instrument sounds on this step
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit)
    }

    /// The character used to render this step
    pub const fn symbol(&self) -> char {
        match self {
            Self::Hit => 'x',
            Self::Rest => '-',
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A full measure of [`MEASURE_LEN`] steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Steps([Step; MEASURE_LEN]);

impl Steps {
    /// A measure of rests
    pub const EMPTY: Self = Self([Step::Rest; MEASURE_LEN]);

    /// Create a measure from steps
    pub const fn new(steps: [Step; MEASURE_LEN]) -> Self {
        Self(steps)
    }

    /// Translate raw step bytes
    pub fn from_bytes(bytes: [u8; MEASURE_LEN]) -> Self {
        Self(bytes.map(Step::from))
    }

    /// The steps in order
    pub fn as_slice(&self) -> &[Step] {
        &self.0
    }

    /// Iterate over the steps in order
    pub fn iter(&self) -> impl Iterator<Item = Step> + '_ {
        self.0.iter().copied()
    }

    /// Indices of the steps that are hits
    pub fn hits(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, step)| step.is_hit().then_some(i))
    }

    /// The measure split into groups of [`GROUP_LEN`]
    pub fn groups(&self) -> impl Iterator<Item = &[Step]> {
        self.0.chunks(GROUP_LEN)
    }
}

impl Default for Steps {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<[Step; MEASURE_LEN]> for Steps {
    fn from(value: [Step; MEASURE_LEN]) -> Self {
        Self(value)
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("|")?;
        for group in self.groups() {
            for step in group {
                write!(f, "{step}")?;
            }
            f.write_str("|")?;
        }
        Ok(())
    }
}
