mod local_match;
mod session_rng;

pub use local_match::{FirstPlayerMode, LocalMatch, MatchSettings, MatchView, Opponent};
pub use session_rng::SessionRng;
