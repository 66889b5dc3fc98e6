mod common;
use common::*;

#[cfg(test)]
mod generate
{
    use std::collections::HashSet;

    use super::*;
    use taflmind::prelude::*;
    use templates::{board, move_set, move_strings, mv};

    const CORNER: &str = "7 + . . . . . +
                          6 . . . . . . .
                          5 . . . . . . .
                          4 . . . + . . .
                          3 . . . . . . .
                          2 A D . . . . .
                          1 + K . . . . +
                            a b c d e f g";

    #[test]
    fn attacker_moves_match_enumeration()
    {
        let _setup = setup::setup();
        let position = board(&format!("{}\nInProgress;Attacker", CORNER));

        // a1 is a corner, b2 is taken, and west of a2 is off the board.
        assert_eq!(move_strings(&position), vec!["a2a3"]);
    }

    #[test]
    fn defender_moves_match_enumeration()
    {
        let _setup = setup::setup();
        let position = board(&format!("{}\nInProgress;Defender", CORNER));

        // Scan order is by square, then north, east, south, west.
        assert_eq!(move_strings(&position), vec!["kc1", "ka1", "b2b3", "b2c2"]);

        let expected: HashSet<Move> = ["ka1", "kc1", "b2b3", "b2c2"].into_iter().map(mv).collect();
        assert_eq!(move_set(&position), expected);
    }

    #[test]
    fn initial_moves()
    {
        let _setup = setup::setup();
        let initial = Board::new();
        let moves = move_set(&initial);

        assert_eq!(moves.len(), 24);
        assert!(moves.contains(&mv("c1b1")));
        assert!(moves.contains(&mv("d2c2")));
        assert!(!moves.contains(&mv("d1d2")));

        let defender_turn = initial.apply(&mv("c1b1"));
        let moves = move_set(&defender_turn);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| !m.king));
    }

    #[test]
    fn only_the_king_enters_the_throne()
    {
        let _setup = setup::setup();
        let position = board(
            "7 + . . . . . +
             6 . . . . . . .
             5 . . . K . . .
             4 . . D + . . .
             3 . . . . . . .
             2 . . . . . . .
             1 + . . . . . +
               a b c d e f g
             InProgress;Defender",
        );

        let moves = move_set(&position);
        assert!(moves.contains(&mv("kd4")));
        assert!(!moves.contains(&mv("c4d4")));
        assert!(moves.contains(&mv("c4c3")));
    }

    #[test]
    fn generated_moves_are_sound()
    {
        let _setup = setup::setup();
        for position in templates::random_positions(7, 12, 20)
        {
            let occupied = position.occupied();
            let movers = position.pieces(position.to_move());

            for m in position.generate_moves()
            {
                assert!(movers.contains(m.from), "{} moves a piece the side to move doesn't own", m);
                assert!(!occupied.contains(m.to), "{} lands on an occupied square", m);
                assert!(m.king || !position.restricted().contains(m.to), "{} enters a restricted square", m);
                assert_eq!(m.king, position.king().contains(m.from));
                assert!(Direction::to(m.from, m.to).is_some(), "{} is not a single step", m);
            }
        }
    }

    #[test]
    fn generation_is_lazy_and_repeatable()
    {
        let _setup = setup::setup();
        let initial = Board::new();

        let first = initial.generate_moves().next();
        assert_eq!(first, Some(mv("c1c2")));

        let mut generator = initial.generate_moves();
        let all = generator.by_ref().collect::<Vec<_>>();
        assert_eq!(generator.next(), None);
        assert_eq!(all, initial.generate_moves().collect::<Vec<_>>());
    }

    #[test]
    fn blocked_side_yields_nothing()
    {
        let _setup = setup::setup();
        let position = board(
            "7 + . . . . . +
             6 . . . . . K .
             5 . . . . . . .
             4 . . . + . . .
             3 D . . . . . .
             2 A D . . . . .
             1 + . . . . . +
               a b c d e f g
             InProgress;Attacker",
        );

        assert_eq!(position.generate_moves().next(), None);
    }
}
