mod common;
use common::*;

#[cfg(test)]
mod notation
{
    use std::collections::HashSet;

    use super::*;
    use taflmind::prelude::*;
    use templates::{board, mv, play_all};

    fn sq(raw: &str) -> Square
    {
        Square::from(raw.parse::<Coord>().unwrap())
    }

    #[test]
    fn squares_count_from_a1()
    {
        let _setup = setup::setup();

        assert_eq!(sq("a1"), 0);
        assert_eq!(sq("g1"), 6);
        assert_eq!(sq("a2"), 7);
        assert_eq!(sq("d4"), square::consts::CENTER);
        assert_eq!(sq("g7"), 48);
        assert_eq!(Coord::from(sq("e6")).to_string(), "e6");
    }

    #[test]
    fn rejects_coords_off_the_board()
    {
        let _setup = setup::setup();

        for raw in ["h1", "a8", "a0", "a", "", "11", "A1", "c-2", "a+1", "a01", "b 2"]
        {
            let result = raw.parse::<Coord>();
            assert!(result.is_err(), "{} parsed as {:?}", raw, result);
        }
    }

    #[test]
    fn coords_print_what_they_parse()
    {
        let _setup = setup::setup();

        for square in 0 .. square::consts::SIZE
        {
            let printed = Coord::from(square).to_string();
            let parsed = printed.parse::<Coord>().unwrap();
            assert_eq!(Square::from(parsed), square);
            assert_eq!(parsed.to_string(), printed);
        }
    }

    #[test]
    fn steps_stop_at_the_edge()
    {
        let _setup = setup::setup();

        assert_eq!(square::step(sq("d4"), Direction::North), Some(sq("d5")));
        assert_eq!(square::step(sq("d4"), Direction::West), Some(sq("c4")));
        assert_eq!(square::step(sq("g3"), Direction::East), None);
        assert_eq!(square::step(sq("c1"), Direction::South), None);
        assert_eq!(square::neighbours(sq("a1")).len(), 2);
        assert_eq!(square::neighbours(sq("a4")).len(), 3);
        assert_eq!(square::neighbours(sq("d4")).len(), 4);
        assert_eq!(Direction::to(sq("c3"), sq("c2")), Some(Direction::South));
        assert_eq!(Direction::to(sq("c3"), sq("c5")), None);
    }

    #[test]
    fn parses_ordinary_moves()
    {
        let _setup = setup::setup();
        let parsed = mv("c3c2");

        assert_eq!(parsed.from, sq("c3"));
        assert_eq!(parsed.to, sq("c2"));
        assert!(!parsed.king);
        assert_eq!(parsed.to_string(), "c3c2");
        assert_eq!(mv(" c1b1 "), mv("c1b1"));
    }

    #[test]
    fn king_moves_ignore_their_origin()
    {
        let _setup = setup::setup();
        let parsed = mv("kd5");

        assert!(parsed.king);
        assert_eq!(parsed.to, sq("d5"));
        assert_eq!(parsed.to_string(), "kd5");

        let from_below = Move { from: sq("d4"), to: sq("d5"), king: true };
        let from_beside = Move { from: sq("c5"), to: sq("d5"), king: true };
        assert_eq!(parsed, from_below);
        assert_eq!(parsed, from_beside);

        let moves: HashSet<Move> = [parsed, from_below, from_beside].into_iter().collect();
        assert_eq!(moves.len(), 1);

        // The same step by an ordinary piece is a different move.
        let ordinary = Move { from: sq("d4"), to: sq("d5"), king: false };
        assert_ne!(parsed, ordinary);
        assert_ne!(mv("c3c2"), mv("b2c2"));
    }

    #[test]
    fn rejects_malformed_moves()
    {
        let _setup = setup::setup();

        for raw in ["", "c3", "c3c3", "c3c5", "c3d4", "k", "kh1", "c3h3", "x9y9", "c3c2c1", "K d4"]
        {
            let result = raw.parse::<Move>();
            assert!(result.is_err(), "{} parsed as {:?}", raw, result);
            assert_eq!(result.unwrap_err().kind, Kind::ParseError);
        }
    }

    #[test]
    fn check_finds_the_king_origin()
    {
        let _setup = setup::setup();
        let position = board(
            "7 + . . . . . +
             6 . . . . . . .
             5 . . . . . . .
             4 . . A + . . .
             3 . A K . . . .
             2 . . . . . . .
             1 + . . . . . +
               a b c d e f g
             InProgress;Defender",
        );

        let resolved = position.check(&mv("kc2")).unwrap();
        assert_eq!(resolved.from, sq("c3"));
        assert_eq!(resolved.to, sq("c2"));

        let err = position.check(&mv("c3c2")).unwrap_err();
        assert_eq!(err.kind, Kind::InvalidMove);
        assert!(err.msg.contains("k<square>"), "{}", err);
    }

    #[test]
    fn sides_parse_by_name()
    {
        let _setup = setup::setup();

        assert_eq!("attacker".parse::<Side>().unwrap(), Side::Attacker);
        assert_eq!("Defender".parse::<Side>().unwrap(), Side::Defender);
        assert_eq!("d".parse::<Side>().unwrap(), Side::Defender);
        assert!("king".parse::<Side>().is_err());
        assert_eq!(Side::Attacker.flip(), Side::Defender);
        assert!(Side::Attacker.maximizing());
    }

    #[test]
    fn parsed_moves_replay_a_game()
    {
        let _setup = setup::setup();
        let played = play_all(Board::new(), &["c1c2", "c3b3", "a3a2", "e5f5"]);

        let expected = board(
            "7 + . A A A . +
             6 . . . A . . .
             5 A . D D . D A
             4 A A D K D A A
             3 . D . D D . A
             2 A . A A . . .
             1 + . . A A . +
               a b c d e f g
             InProgress;Attacker",
        );

        assert_eq!(played, expected);
        assert_eq!(played.to_string().parse::<Board>().unwrap(), played);
    }
}
