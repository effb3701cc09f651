use crate::{Card, Rank, Suit, RANKS, SUITS};

impl quickcheck::Arbitrary for Suit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&SUITS).unwrap()
    }
}

impl quickcheck::Arbitrary for Rank {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&RANKS).unwrap()
    }
}

impl quickcheck::Arbitrary for Card {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            rank: Rank::arbitrary(g),
            suit: Suit::arbitrary(g),
        }
    }
}
