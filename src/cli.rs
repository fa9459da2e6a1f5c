use clap::Parser;

#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Seed for the engines - if omitted, moves are drawn from the thread RNG
    #[clap(long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// Stop self-play after this many plies
    #[clap(long, value_name = "PLIES", default_value = "200")]
    pub max_plies: usize,
    /// Play against the engine from stdin, one "e2 e4" move per line
    #[clap(long)]
    pub human: bool,
    /// Side the engine plays
    #[clap(long, value_name = "COLOR", default_value = "black")]
    pub engine_side: String,
    /// Milliseconds to wait before each engine move
    #[clap(long, value_name = "MS", default_value = "0")]
    pub delay_ms: u64,
}
