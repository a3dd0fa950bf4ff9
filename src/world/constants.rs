// Group-stage scoring: a loss still awards a point, so points alone never
// distinguish teams with the same record.
pub const POINTS_PER_WIN: u32 = 2;
pub const POINTS_PER_LOSS: u32 = 1;

pub const POT_SIZE: usize = 2;
pub const BRACKET_SIZE: usize = 8;
pub const QUARTERFINALS: usize = BRACKET_SIZE / 2;

// Weights of the recent-form signal in the win probability. Tunable, no
// calibration behind them.
pub struct FormWeight;
impl FormWeight {
    pub const WINS: f64 = 0.05;
    pub const POINT_DIFFERENCE: f64 = 0.001;
}

// Score generation bounds, upper ends exclusive. The loser is drawn below
// the winner; overtime is added to both sides until the scores differ.
pub struct ScoreRange;
impl ScoreRange {
    pub const WINNER_MIN: u16 = 80;
    pub const WINNER_MAX: u16 = 100;
    pub const LOSER_MIN: u16 = 70;
    pub const OVERTIME_MIN: u16 = 5;
    pub const OVERTIME_MAX: u16 = 15;
}
