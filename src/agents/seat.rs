use crate::*;
use std::path::PathBuf;
use std::str::FromStr;

/// Textual description of who plays a side.
///
/// - `fish` plays random legal moves
/// - `fish:<seed>` does so reproducibly
/// - `uci:<path>` runs the engine binary at `path`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seat {
    Fish(Option<u64>),
    Uci(PathBuf),
}

impl Seat {
    pub fn agent(&self) -> Box<dyn Agent> {
        match self {
            Seat::Fish(None) => Box::new(Fish::default()),
            Seat::Fish(Some(seed)) => Box::new(Fish::seeded(*seed)),
            Seat::Uci(path) => Box::new(Uci::new(path.clone())),
        }
    }
}

impl FromStr for Seat {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None if s == "fish" => Ok(Seat::Fish(None)),
            Some(("fish", seed)) => Ok(Seat::Fish(Some(seed.parse()?))),
            Some(("uci", path)) if !path.is_empty() => Ok(Seat::Uci(PathBuf::from(path))),
            _ => Err(anyhow::anyhow!("unknown seat {:?}, expected fish, fish:<seed> or uci:<path>", s)),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Seat::Fish(None) => write!(f, "fish"),
            Seat::Fish(Some(seed)) => write!(f, "fish:{}", seed),
            Seat::Uci(path) => write!(f, "uci:{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parses_seats() {
        assert_eq!("fish".parse::<Seat>().unwrap(), Seat::Fish(None));
        assert_eq!("fish:42".parse::<Seat>().unwrap(), Seat::Fish(Some(42)));
        assert_eq!(
            "uci:/usr/bin/stockfish".parse::<Seat>().unwrap(),
            Seat::Uci(PathBuf::from("/usr/bin/stockfish"))
        );
    }
    #[test]
    fn rejects_unknown_seats() {
        for s in ["", "human", "fish:", "fish:x", "uci:"] {
            assert!(s.parse::<Seat>().is_err(), "{}", s);
        }
    }
    #[test]
    fn display_parses_back() {
        let seat = Seat::Fish(Some(9));
        assert_eq!(seat.to_string().parse::<Seat>().unwrap(), seat);
    }
}
