/// 単独ジョブスコアの重み。
/// 目的: 時給を主軸に、希望労働時間への近さと環境嗜好で味付けする。
/// いずれもデータから導出した値ではなく、調整可能な設計定数。
pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    pay: 2.0,
    hours_alignment: 10.0,
    preference_bonus: 5.0,
};

#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    /// 時給1単位あたりの寄与
    pub pay: f64,
    /// hours_alignment（0.0〜1.0）への乗数
    pub hours_alignment: f64,
    /// タイトルが環境嗜好に合致したときの加点
    pub preference_bonus: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_positive() {
        assert!(SCORE_WEIGHTS.pay > 0.0);
        assert!(SCORE_WEIGHTS.hours_alignment > 0.0);
        assert!(SCORE_WEIGHTS.preference_bonus > 0.0);
    }
}
