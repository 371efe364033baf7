use crate::expression::ParseError;
use crate::puzzle::{Puzzle, PuzzleError};
use crate::utils::UtilsError;

fn puzzle(equation: &str, radix: u32) -> Puzzle {
    match Puzzle::new(equation, radix) {
        Ok(p) => p,
        Err(e) => panic!("failed to build '{}': {}", equation, e),
    }
}

#[test]
fn test_letters_are_alphabetical() {
    let p = puzzle("SEND+MORE=MONEY", 10);
    assert_eq!(p.letters(), &['D', 'E', 'M', 'N', 'O', 'R', 'S', 'Y']);
    assert_eq!(p.num_letters(), 8);
    assert_eq!(p.radix(), 10);
    assert_eq!(p.equation(), "SEND+MORE=MONEY");
}

#[test]
fn test_leading_flags() {
    let p = puzzle("SEND+MORE=MONEY", 10);
    let leading: Vec<char> = p
        .letters()
        .iter()
        .enumerate()
        .filter(|(i, _)| p.is_leading(*i))
        .map(|(_, &c)| c)
        .collect();
    assert_eq!(leading, vec!['M', 'S']);
    assert!(!p.is_leading(100));
}

#[test]
fn test_eval_known_solution() {
    let p = puzzle("SEND+MORE=MONEY", 10);
    assert!(p.eval(&[7, 5, 1, 6, 0, 8, 9, 2]));
    assert!(!p.eval(&[7, 5, 1, 6, 0, 8, 9, 3]));
}

#[test]
fn test_eval_rejects_leading_zero() {
    // 12 + 21 = 33; A and B both start a word
    let p = puzzle("AB+BA=CC", 10);
    assert!(p.eval(&[1, 2, 3]));
    assert!(!p.eval(&[0, 3, 3]));
    assert!(!p.eval(&[3, 0, 3]));
}

#[test]
fn test_eval_division_by_zero_is_rejected() {
    let p = puzzle("A/0=B", 10);
    assert!(!p.eval(&[1, 2]));
}

#[test]
fn test_eval_exact_division() {
    let p = puzzle("NORTH/SOUTH=EAST/WEST", 10);
    assert_eq!(p.num_letters(), 10);

    let q = puzzle("AB/C=D", 10);
    // 12 / 4 = 3, while 13 / 4 is not an integer
    assert!(q.eval(&[1, 2, 4, 3]));
    assert!(!q.eval(&[1, 3, 4, 3]));
}

#[test]
fn test_substitute() {
    let p = puzzle("SEND+MORE=MONEY", 10);
    assert_eq!(p.substitute(&[7, 5, 1, 6, 0, 8, 9, 2]), "9567+1085=10652");

    let hex = puzzle("A+B=10", 16);
    assert!(hex.eval(&[15, 1]));
    assert_eq!(hex.substitute(&[15, 1]), "F+1=10");
}

#[test]
fn test_invalid_radix() {
    assert_eq!(
        Puzzle::new("A=B", 1).err(),
        Some(PuzzleError::InvalidRadix(1))
    );
    assert_eq!(
        Puzzle::new("A=B", 37).err(),
        Some(PuzzleError::InvalidRadix(37))
    );
}

#[test]
fn test_malformed_equations_rejected() {
    assert_eq!(
        Puzzle::new("A+B", 10).err(),
        Some(PuzzleError::InvalidEquation(UtilsError::EqualsCount(0)))
    );
    assert!(matches!(
        Puzzle::new("(A+B)=C", 10),
        Err(PuzzleError::InvalidEquation(
            UtilsError::UnsupportedCharacter { .. }
        ))
    ));
    assert_eq!(
        Puzzle::new("A+=C", 10).err(),
        Some(PuzzleError::ParseError(ParseError::EmptyOperand {
            position: 2
        }))
    );
}
