pub mod sequencer;
pub mod stream;

pub use sequencer::{Phase, Sequencer, SequencerHandle, TimingProfile, ViewState};
