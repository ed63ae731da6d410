//! Built-in strategies
//!
//! Each strategy is a plain struct holding its (immutable) configuration.
//! [`StrategySpec`] describes one in serializable form so lineups can be
//! written in configuration files.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::strategy::{Move, Strategy};

/// Always cooperate, never defect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AlwaysCooperate;

impl Strategy for AlwaysCooperate {
    fn decide(&self, _own: &[Move], _opponent: &[Move], _rng: &mut dyn RngCore) -> Move {
        Move::Cooperate
    }

    fn name(&self) -> String {
        "cooperator".to_string()
    }
}

/// Always defect, never cooperate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AlwaysDefect;

impl Strategy for AlwaysDefect {
    fn decide(&self, _own: &[Move], _opponent: &[Move], _rng: &mut dyn RngCore) -> Move {
        Move::Defect
    }

    fn name(&self) -> String {
        "defector".to_string()
    }
}

/// Defect with probability `temperature` each round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomChoice {
    pub temperature: f64,
}

impl RandomChoice {
    pub fn new(temperature: f64) -> Self {
        Self { temperature }
    }
}

impl Default for RandomChoice {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Strategy for RandomChoice {
    fn decide(&self, _own: &[Move], _opponent: &[Move], rng: &mut dyn RngCore) -> Move {
        Move::defect_if(rng.random::<f64>() < self.temperature)
    }

    fn name(&self) -> String {
        format!("random {}", self.temperature)
    }
}

/// Cooperate first, then copy the opponent's last move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TitForTat;

impl Strategy for TitForTat {
    fn decide(&self, _own: &[Move], opponent: &[Move], _rng: &mut dyn RngCore) -> Move {
        tit_for_tat(opponent)
    }

    fn name(&self) -> String {
        "tit for tat".to_string()
    }
}

fn tit_for_tat(opponent: &[Move]) -> Move {
    opponent.last().copied().unwrap_or(Move::Cooperate)
}

/// Only retaliate after two consecutive defections.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TitForTwoTats;

impl Strategy for TitForTwoTats {
    fn decide(&self, _own: &[Move], opponent: &[Move], _rng: &mut dyn RngCore) -> Move {
        match opponent {
            [.., a, b] => Move::defect_if(a.is_defect() && b.is_defect()),
            _ => Move::Cooperate,
        }
    }

    fn name(&self) -> String {
        "tit for two tats".to_string()
    }
}

/// Retaliate if either of the opponent's last two moves was a defection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TwoTitsForTat;

impl Strategy for TwoTitsForTat {
    fn decide(&self, _own: &[Move], opponent: &[Move], _rng: &mut dyn RngCore) -> Move {
        match opponent {
            [.., a, b] => Move::defect_if(a.is_defect() || b.is_defect()),
            _ => Move::Cooperate,
        }
    }

    fn name(&self) -> String {
        "two tit for tat".to_string()
    }
}

/// Cooperate first, then play the opposite of the opponent's last move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReverseTitForTat;

impl Strategy for ReverseTitForTat {
    fn decide(&self, _own: &[Move], opponent: &[Move], _rng: &mut dyn RngCore) -> Move {
        opponent.last().map_or(Move::Cooperate, |m| m.flip())
    }

    fn name(&self) -> String {
        "reverse tit for tat".to_string()
    }
}

/// Tit-for-tat that sneaks in a defection with probability `temperature`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Joss {
    pub temperature: f64,
}

impl Joss {
    pub fn new(temperature: f64) -> Self {
        Self { temperature }
    }
}

impl Default for Joss {
    fn default() -> Self {
        Self::new(0.05)
    }
}

impl Strategy for Joss {
    fn decide(&self, _own: &[Move], opponent: &[Move], rng: &mut dyn RngCore) -> Move {
        if rng.random::<f64>() < self.temperature {
            return Move::Defect;
        }
        tit_for_tat(opponent)
    }

    fn name(&self) -> String {
        format!("joss {}", self.temperature)
    }
}

/// Answer an unprovoked defection with a short burst of retaliation.
///
/// Defects right after being exploited, keeps defecting while its current
/// run of defections is shorter than `retaliate`, then cooperates. The
/// opening move is never counted as part of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirmButFair {
    pub retaliate: usize,
}

impl FirmButFair {
    pub fn new(retaliate: usize) -> Self {
        Self { retaliate }
    }
}

impl Default for FirmButFair {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Strategy for FirmButFair {
    fn decide(&self, own: &[Move], opponent: &[Move], _rng: &mut dyn RngCore) -> Move {
        let (Some(mine), Some(theirs)) = (own.last(), opponent.last()) else {
            return Move::Cooperate;
        };
        if theirs.is_defect() && !mine.is_defect() {
            return Move::Defect;
        }

        let run = own[1..].iter().rev().take_while(|m| m.is_defect()).count();
        Move::defect_if(run > 0 && run < self.retaliate)
    }

    fn name(&self) -> String {
        format!("firm but fair {}", self.retaliate)
    }
}

/// Cooperate until the opponent defects once, then always defect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GrimTrigger;

impl Strategy for GrimTrigger {
    fn decide(&self, _own: &[Move], opponent: &[Move], _rng: &mut dyn RngCore) -> Move {
        Move::defect_if(opponent.iter().any(|m| m.is_defect()))
    }

    fn name(&self) -> String {
        "grim trigger".to_string()
    }
}

/// Defect for the first `retaliate + 1` rounds, then play tit-for-tat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bully {
    pub retaliate: usize,
}

impl Bully {
    pub fn new(retaliate: usize) -> Self {
        Self { retaliate }
    }
}

impl Default for Bully {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Strategy for Bully {
    fn decide(&self, own: &[Move], opponent: &[Move], _rng: &mut dyn RngCore) -> Move {
        if own.len() <= self.retaliate {
            return Move::Defect;
        }
        tit_for_tat(opponent)
    }

    fn name(&self) -> String {
        format!("bully {}", self.retaliate)
    }
}

/// Open with a defection; back off if the opponent hits back.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Prober;

impl Strategy for Prober {
    fn decide(&self, own: &[Move], opponent: &[Move], _rng: &mut dyn RngCore) -> Move {
        match (own.last(), opponent.last()) {
            (Some(Move::Defect), Some(Move::Defect)) => Move::Cooperate,
            (Some(_), Some(&theirs)) => theirs,
            _ => Move::Defect,
        }
    }

    fn name(&self) -> String {
        "prober".to_string()
    }
}

/// Open with a defection; keep exploiting an opponent that doesn't react.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spoiler;

impl Strategy for Spoiler {
    fn decide(&self, own: &[Move], opponent: &[Move], _rng: &mut dyn RngCore) -> Move {
        match (own.last(), opponent.last()) {
            (Some(Move::Defect), Some(Move::Cooperate)) => Move::Defect,
            (Some(_), Some(&theirs)) => theirs,
            _ => Move::Defect,
        }
    }

    fn name(&self) -> String {
        "spoiler".to_string()
    }
}

/// Serializable description of a built-in strategy
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategySpec {
    AlwaysCooperate,
    AlwaysDefect,
    Random {
        #[serde(default = "default_random_temperature")]
        temperature: f64,
    },
    TitForTat,
    TitForTwoTats,
    TwoTitsForTat,
    ReverseTitForTat,
    Joss {
        #[serde(default = "default_joss_temperature")]
        temperature: f64,
    },
    FirmButFair {
        #[serde(default = "default_retaliate")]
        retaliate: usize,
    },
    GrimTrigger,
    Bully {
        #[serde(default = "default_retaliate")]
        retaliate: usize,
    },
    Prober,
    Spoiler,
}

fn default_random_temperature() -> f64 {
    0.5
}

fn default_joss_temperature() -> f64 {
    0.05
}

fn default_retaliate() -> usize {
    2
}

impl StrategySpec {
    pub fn build(&self) -> Box<dyn Strategy> {
        match *self {
            StrategySpec::AlwaysCooperate => Box::new(AlwaysCooperate),
            StrategySpec::AlwaysDefect => Box::new(AlwaysDefect),
            StrategySpec::Random { temperature } => Box::new(RandomChoice::new(temperature)),
            StrategySpec::TitForTat => Box::new(TitForTat),
            StrategySpec::TitForTwoTats => Box::new(TitForTwoTats),
            StrategySpec::TwoTitsForTat => Box::new(TwoTitsForTat),
            StrategySpec::ReverseTitForTat => Box::new(ReverseTitForTat),
            StrategySpec::Joss { temperature } => Box::new(Joss::new(temperature)),
            StrategySpec::FirmButFair { retaliate } => Box::new(FirmButFair::new(retaliate)),
            StrategySpec::GrimTrigger => Box::new(GrimTrigger),
            StrategySpec::Bully { retaliate } => Box::new(Bully::new(retaliate)),
            StrategySpec::Prober => Box::new(Prober),
            StrategySpec::Spoiler => Box::new(Spoiler),
        }
    }

    /// The classic twelve-strategy field
    pub fn default_lineup() -> Vec<StrategySpec> {
        vec![
            StrategySpec::TitForTat,
            StrategySpec::GrimTrigger,
            StrategySpec::AlwaysCooperate,
            StrategySpec::TitForTwoTats,
            StrategySpec::TwoTitsForTat,
            StrategySpec::FirmButFair { retaliate: 2 },
            StrategySpec::AlwaysDefect,
            StrategySpec::Prober,
            StrategySpec::Spoiler,
            StrategySpec::Joss { temperature: 0.1 },
            StrategySpec::Bully { retaliate: 3 },
            StrategySpec::Random { temperature: 0.5 },
        ]
    }
}

/// Build every strategy in `specs`, preserving order
pub fn build_lineup(specs: &[StrategySpec]) -> Vec<Box<dyn Strategy>> {
    specs.iter().map(StrategySpec::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use Move::{Cooperate as C, Defect as D};

    fn make_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn decide(strategy: &dyn Strategy, own: &[Move], opponent: &[Move]) -> Move {
        strategy.decide(own, opponent, &mut make_rng())
    }

    #[test]
    fn test_always_cooperate_and_defect() {
        for len in 0..5 {
            let own = vec![D; len];
            let opp = vec![D; len];
            assert_eq!(decide(&AlwaysCooperate, &own, &opp), C);
            assert_eq!(decide(&AlwaysDefect, &own, &opp), D);
        }
    }

    #[test]
    fn test_tit_for_tat() {
        assert_eq!(decide(&TitForTat, &[], &[]), C);
        assert_eq!(decide(&TitForTat, &[C], &[C]), C);
        assert_eq!(decide(&TitForTat, &[C], &[D]), D);
        assert_eq!(decide(&TitForTat, &[C, D], &[D, C]), C);
    }

    #[test]
    fn test_tit_for_two_tats() {
        assert_eq!(decide(&TitForTwoTats, &[C], &[D]), C);
        assert_eq!(decide(&TitForTwoTats, &[C, C], &[C, D]), C);
        assert_eq!(decide(&TitForTwoTats, &[C, C], &[D, D]), D);
    }

    #[test]
    fn test_two_tits_for_tat() {
        assert_eq!(decide(&TwoTitsForTat, &[C], &[D]), C);
        assert_eq!(decide(&TwoTitsForTat, &[C, C], &[D, C]), D);
        assert_eq!(decide(&TwoTitsForTat, &[C, C], &[C, C]), C);
    }

    #[test]
    fn test_reverse_tit_for_tat() {
        assert_eq!(decide(&ReverseTitForTat, &[], &[]), C);
        assert_eq!(decide(&ReverseTitForTat, &[C], &[D]), C);
        assert_eq!(decide(&ReverseTitForTat, &[C], &[C]), D);
    }

    #[test]
    fn test_grim_trigger() {
        assert_eq!(decide(&GrimTrigger, &[C, C], &[C, C]), C);
        assert_eq!(decide(&GrimTrigger, &[C, C, D], &[C, D, C]), D);
    }

    #[test]
    fn test_firm_but_fair() {
        let fbf = FirmButFair::default();
        assert_eq!(decide(&fbf, &[], &[]), C);
        // Exploited last round
        assert_eq!(decide(&fbf, &[C], &[D]), D);
        // One retaliation so far
        assert_eq!(decide(&fbf, &[C, D], &[D, D]), D);
        // Retaliated enough
        assert_eq!(decide(&fbf, &[C, D, D], &[D, D, D]), C);
        // Opening defection doesn't count toward the run
        assert_eq!(decide(&fbf, &[D], &[C]), C);
        assert_eq!(decide(&fbf, &[C, C], &[C, C]), C);
    }

    #[test]
    fn test_firm_but_fair_longer_retaliation() {
        let fbf = FirmButFair::new(3);
        assert_eq!(decide(&fbf, &[C, D, D], &[D, D, D]), D);
        assert_eq!(decide(&fbf, &[C, D, D, D], &[D, D, D, D]), C);
    }

    #[test]
    fn test_bully() {
        let bully = Bully::new(3);
        for len in 0..=3 {
            assert_eq!(decide(&bully, &vec![D; len], &vec![C; len]), D);
        }
        assert_eq!(decide(&bully, &[D, D, D, D], &[C, C, C, C]), C);
        assert_eq!(decide(&bully, &[D, D, D, D], &[C, C, C, D]), D);
    }

    #[test]
    fn test_prober() {
        assert_eq!(decide(&Prober, &[], &[]), D);
        assert_eq!(decide(&Prober, &[D], &[D]), C);
        assert_eq!(decide(&Prober, &[D], &[C]), C);
        assert_eq!(decide(&Prober, &[C], &[D]), D);
    }

    #[test]
    fn test_spoiler() {
        assert_eq!(decide(&Spoiler, &[], &[]), D);
        assert_eq!(decide(&Spoiler, &[D], &[C]), D);
        assert_eq!(decide(&Spoiler, &[D], &[D]), D);
        assert_eq!(decide(&Spoiler, &[C], &[C]), C);
    }

    #[test]
    fn test_random_extremes() {
        let never = RandomChoice::new(0.0);
        let always = RandomChoice::new(1.0);
        let mut rng = make_rng();
        for _ in 0..50 {
            assert_eq!(never.decide(&[], &[], &mut rng), C);
            assert_eq!(always.decide(&[], &[], &mut rng), D);
        }
    }

    #[test]
    fn test_random_rate_statistical() {
        let strategy = RandomChoice::new(0.25);
        let mut rng = make_rng();
        let defects = (0..4000)
            .filter(|_| strategy.decide(&[], &[], &mut rng).is_defect())
            .count();
        let rate = defects as f64 / 4000.0;
        assert!(rate > 0.2 && rate < 0.3, "defection rate {} not ~0.25", rate);
    }

    #[test]
    fn test_joss_zero_temperature_is_tit_for_tat() {
        let joss = Joss::new(0.0);
        let mut rng = make_rng();
        assert_eq!(joss.decide(&[], &[], &mut rng), C);
        assert_eq!(joss.decide(&[C], &[D], &mut rng), D);
        assert_eq!(joss.decide(&[D], &[C], &mut rng), C);
    }

    #[test]
    fn test_joss_full_temperature_always_defects() {
        let joss = Joss::new(1.0);
        let mut rng = make_rng();
        for _ in 0..20 {
            assert_eq!(joss.decide(&[C], &[C], &mut rng), D);
        }
    }

    #[test]
    fn test_names() {
        let names: Vec<String> = build_lineup(&StrategySpec::default_lineup())
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "tit for tat",
                "grim trigger",
                "cooperator",
                "tit for two tats",
                "two tit for tat",
                "firm but fair 2",
                "defector",
                "prober",
                "spoiler",
                "joss 0.1",
                "bully 3",
                "random 0.5",
            ]
        );
    }

    #[test]
    fn test_spec_from_json() {
        let json = r#"[
            {"kind": "tit_for_tat"},
            {"kind": "joss", "temperature": 0.2},
            {"kind": "bully"},
            {"kind": "random"}
        ]"#;
        let specs: Vec<StrategySpec> = serde_json::from_str(json).unwrap();
        assert_eq!(
            specs,
            vec![
                StrategySpec::TitForTat,
                StrategySpec::Joss { temperature: 0.2 },
                StrategySpec::Bully { retaliate: 2 },
                StrategySpec::Random { temperature: 0.5 },
            ]
        );
    }

    #[test]
    fn test_spec_rejects_unknown_kind() {
        let result: Result<StrategySpec, _> = serde_json::from_str(r#"{"kind": "pavlov"}"#);
        assert!(result.is_err());
    }
}
