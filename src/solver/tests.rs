use std::ops::ControlFlow;

use crate::puzzle::Puzzle;
use crate::solver::{PuzzleSolver, SolverError, solve_batch};

fn puzzle(equation: &str) -> Puzzle {
    match Puzzle::new(equation, 10) {
        Ok(p) => p,
        Err(e) => panic!("failed to build '{}': {}", equation, e),
    }
}

#[test]
fn test_send_more_money() {
    let p = puzzle("SEND+MORE=MONEY");
    let result = PuzzleSolver::new(&p).solve();
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(solutions.len(), 1);
        if let Some(solution) = solutions.first() {
            assert_eq!(solution.digits(), &[7, 5, 1, 6, 0, 8, 9, 2]);
            assert_eq!(solution.digit_of(&p, 'M'), Some(1));
            assert_eq!(solution.digit_of(&p, 'Z'), None);
            assert_eq!(format!("{}", solution), "7 5 1 6 0 8 9 2");
        }
    }
}

#[test]
fn test_hip_hip_hurray() {
    let p = puzzle("HIP*HIP=HURRAY");
    let result = PuzzleSolver::new(&p).solve();
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(solutions.len(), 1);
        for solution in &solutions {
            assert!(p.eval(solution.digits()));
        }
    }
}

#[test]
fn test_published_puzzles_have_unique_solutions() {
    // Division, operator chains and mixed sums, from Knuth TAOCP Vol. 4A
    // and ZEITmagazin
    let equations = [
        "NORTH/SOUTH=EAST/WEST",
        "PI*R*R=AREA",
        "SEND+A+TAD+MORE=MONEY",
        "TWELVE+NINE+TWO=ELEVEN+SEVEN+FIVE",
        "TWENTY=SEVEN+SEVEN+SIX",
        "MAI+JUNI+JULI=ALPIN",
    ];

    let results = solve_batch(&equations, 10);
    assert_eq!(results.len(), equations.len());
    for (equation, result) in equations.iter().zip(&results) {
        assert!(
            matches!(result, Ok(s) if s.len() == 1),
            "expected exactly one solution for {}, got {:?}",
            equation,
            result.as_ref().map(Vec::len)
        );
        if let Ok(solutions) = result {
            let p = puzzle(equation);
            for solution in solutions {
                assert!(p.eval(solution.digits()));
            }
        }
    }
}

#[test]
fn test_too_many_letters() {
    let p = puzzle("ABCDEF+GHIJK=A");
    assert_eq!(p.num_letters(), 11);

    let mut visited = 0;
    let result = PuzzleSolver::new(&p).for_each_solution(|_| {
        visited += 1;
        ControlFlow::Continue(())
    });
    assert_eq!(
        result,
        Err(SolverError::TooManyLetters {
            letters: 11,
            radix: 10
        })
    );
    assert_eq!(visited, 0);
}

#[test]
fn test_leading_zero_never_accepted() {
    let p = puzzle("AB+BA=CC");
    let result = PuzzleSolver::new(&p).solve();
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        // C = A + B with distinct non-zero A, B and A + B <= 9
        assert_eq!(solutions.len(), 32);
        for solution in &solutions {
            assert!(solution.digits().iter().all(|&d| d != 0));
            if let [a, b, c] = solution.digits() {
                assert_eq!(a + b, *c);
            }
        }
    }
}

#[test]
fn test_deterministic_order() {
    let p = puzzle("AB+BA=CC");
    let first = PuzzleSolver::new(&p).solve();
    let second = PuzzleSolver::new(&puzzle("AB+BA=CC")).solve();
    assert!(first.is_ok());
    assert_eq!(first, second);
}

#[test]
fn test_early_stop() {
    let p = puzzle("AB+BA=CC");
    let solver = PuzzleSolver::new(&p);

    let mut seen = Vec::new();
    let result = solver.for_each_solution(|assignment| {
        seen.push(assignment.to_vec());
        if seen.len() == 3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(result, Ok(3));
    assert_eq!(seen.len(), 3);

    let limited = solver.solve_limited(5);
    assert!(matches!(&limited, Ok(s) if s.len() == 5));
    if let (Ok(limited), Ok(all)) = (limited, solver.solve()) {
        assert_eq!(limited.as_slice(), &all[..5]);
    }
    assert!(matches!(solver.solve_limited(0), Ok(s) if s.is_empty()));
}

#[test]
fn test_solve_batch_keeps_input_order() {
    let results = solve_batch(&["AB+BA=CC", "SEND+MORE=MONEY", "A+B=", "ABCDEFGHIJK=A"], 10);
    assert_eq!(results.len(), 4);

    assert!(matches!(results.first(), Some(Ok(s)) if s.len() == 32));
    assert!(matches!(results.get(1), Some(Ok(s)) if s.len() == 1));
    assert!(matches!(results.get(2), Some(Err(SolverError::PuzzleError(_)))));
    assert!(matches!(
        results.get(3),
        Some(Err(SolverError::TooManyLetters { letters: 11, .. }))
    ));
}

#[test]
fn test_smaller_radix() {
    // Radix 4, letters A B C: AB + BA = CC reads 5(A + B) = 5C
    match Puzzle::new("AB+BA=CC", 4) {
        Ok(p) => {
            let result = PuzzleSolver::new(&p).solve();
            assert!(matches!(&result, Ok(s) if s.len() == 2));
        }
        Err(e) => panic!("{}", e),
    }
}
