//! Flag parsing and mode resolution. The precedence here is deliberate:
//! poems (or any era filter) beat quotes, quotes beat hadith, and only a
//! fully unflagged invocation reaches the random draw.

use clap::Parser;
use rand::Rng;

use crate::models::Mode;

/// A terminal companion for Arabic poetry, wisdom quotes, and hadith.
#[derive(Debug, Parser)]
#[command(name = "hikma", version)]
pub struct Cli {
    /// Show poetry
    #[arg(short, long)]
    pub poems: bool,

    /// Show wisdom quotes
    #[arg(short, long)]
    pub quotes: bool,

    /// Show prophetic hadith
    #[arg(short = 'd', long, alias = "hadeeth")]
    pub hadith: bool,

    /// Filter poems by era (e.g. 'Abbasid')
    #[arg(short, long, value_name = "NAME")]
    pub era: Option<String>,
}

/// How the mode was arrived at. The front door only falls back through other
/// categories when the choice was random to begin with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Explicit(Mode),
    Random(Mode),
}

impl Resolution {
    pub fn mode(self) -> Mode {
        match self {
            Resolution::Explicit(mode) | Resolution::Random(mode) => mode,
        }
    }

    pub fn is_random(self) -> bool {
        matches!(self, Resolution::Random(_))
    }
}

impl Cli {
    /// The era filter, with an explicitly-empty string treated as absent.
    pub fn era_filter(&self) -> Option<&str> {
        self.era.as_deref().filter(|era| !era.is_empty())
    }

    /// Resolve which category to query. An era filter implies poems even
    /// without the flag; with nothing set we draw uniformly from all three.
    pub fn resolve_mode(&self, rng: &mut impl Rng) -> Resolution {
        if self.poems || self.era_filter().is_some() {
            Resolution::Explicit(Mode::Poems)
        } else if self.quotes {
            Resolution::Explicit(Mode::Quotes)
        } else if self.hadith {
            Resolution::Explicit(Mode::Hadith)
        } else {
            Resolution::Random(Mode::ALL[rng.random_range(0..Mode::ALL.len())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("hikma").chain(args.iter().copied())).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn poems_flag_beats_quotes_flag() {
        let cli = parse(&["--poems", "--quotes"]);
        assert_eq!(cli.resolve_mode(&mut rng()), Resolution::Explicit(Mode::Poems));
    }

    #[test]
    fn era_filter_alone_resolves_to_poems() {
        let cli = parse(&["--era", "Abbasid"]);
        assert_eq!(cli.resolve_mode(&mut rng()), Resolution::Explicit(Mode::Poems));
        assert_eq!(cli.era_filter(), Some("Abbasid"));
    }

    #[test]
    fn empty_era_string_counts_as_absent() {
        let cli = parse(&["--era", ""]);
        assert_eq!(cli.era_filter(), None);
        assert!(cli.resolve_mode(&mut rng()).is_random());
    }

    #[test]
    fn quotes_beat_hadith() {
        let cli = parse(&["-q", "-d"]);
        assert_eq!(cli.resolve_mode(&mut rng()), Resolution::Explicit(Mode::Quotes));
    }

    #[test]
    fn hadeeth_alias_parses() {
        let cli = parse(&["--hadeeth"]);
        assert_eq!(cli.resolve_mode(&mut rng()), Resolution::Explicit(Mode::Hadith));
    }

    #[test]
    fn unflagged_invocation_draws_randomly() {
        let cli = parse(&[]);
        let resolution = cli.resolve_mode(&mut rng());
        assert!(resolution.is_random());
        assert!(Mode::ALL.contains(&resolution.mode()));
    }
}
