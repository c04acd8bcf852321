//! Named values available to scripts.

use crate::node::Node;
use std::f64::consts;

const PHI: f64 = 1.618_033_988_749_895;
const SQRT_E: f64 = 1.648_721_270_700_128_2;
const SQRT_PI: f64 = 1.772_453_850_905_516;
const SQRT_PHI: f64 = 1.272_019_649_514_069;

pub fn all_constants() -> Vec<Node> {
    vec![
        Node::numeric("e", consts::E),
        Node::numeric("pi", consts::PI),
        Node::numeric("phi", PHI),
        Node::numeric("sqrt2", consts::SQRT_2),
        Node::numeric("sqrte", SQRT_E),
        Node::numeric("sqrtpi", SQRT_PI),
        Node::numeric("sqrtphi", SQRT_PHI),
        Node::numeric("ln2", consts::LN_2),
        Node::numeric("log2e", consts::LOG2_E),
        Node::numeric("ln10", consts::LN_10),
        Node::numeric("log10e", consts::LOG10_E),
        Node::bool("true", true),
        Node::bool("false", false),
        Node::null("null"),
    ]
}
