/// Easing curves used by the morph engine and bloom transitions.
///
/// The names follow the usual power-curve family: `PowerNOut` decelerates,
/// `PowerNInOut` accelerates then decelerates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    #[default]
    Power1Out,
    Power2Out,
    Power3InOut,
}

impl Ease {
    /// Map linear progress `t` (clamped to 0..=1) onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power2Out => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Ease::Power3InOut => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u * u / 2.0
                }
            }
        }
    }
}
