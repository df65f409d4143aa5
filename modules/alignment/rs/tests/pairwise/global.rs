use seqsim_alignment_rs::pairwise::dp::{Summary, Variant};
use seqsim_alignment_rs::pairwise::scoring::{self, Params};

use super::*;

struct Workload<'a> {
    seq1: &'a str,
    seq2: &'a str,
    score: Score,
    rows: Vec<(&'a str, &'a str)>,
}

fn ensure(engine: &Engine, w: Workload<'_>) {
    let swapped: Vec<_> = w.rows.iter().map(|(x, y)| (*y, *x)).collect();

    for (seq1, seq2, expected) in [(w.seq1, w.seq2, &w.rows), (w.seq2, w.seq1, &swapped)] {
        let solution = engine.global(&seq1, &seq2).unwrap();
        assert_eq!(*solution.variant(), Variant::Global);
        assert_eq!(*solution.score(), w.score, "{seq1} vs {seq2}");

        let result: Vec<_> = solution.alignments().iter().map(rows).collect();
        let expected: Vec<_> = expected
            .iter()
            .map(|(x, y)| (x.to_string(), y.to_string()))
            .collect();
        assert_eq!(result, expected, "{seq1} vs {seq2}");

        for aln in solution.alignments() {
            assert_eq!(*aln.score(), w.score);
            assert_eq!(*aln.seq1(), 0..seq1.len());
            assert_eq!(*aln.seq2(), 0..seq2.len());
        }
    }
}

#[test]
fn test_all_optimal_paths() {
    let engine = Engine::default();
    let workload = vec![
        Workload {
            seq1: "ATTA",
            seq2: "ATTTTA",
            score: 4,
            rows: vec![
                ("A--TTA", "ATTTTA"),
                ("A-T-TA", "ATTTTA"),
                ("AT--TA", "ATTTTA"),
                ("A-TT-A", "ATTTTA"),
                ("AT-T-A", "ATTTTA"),
                ("ATT--A", "ATTTTA"),
            ],
        },
        Workload {
            seq1: "GATTACA",
            seq2: "GCATGCU",
            score: 2,
            rows: vec![
                ("GATTACA", "GCATGCU"),
                ("G-ATTACA", "GCA-TGCU"),
                ("G-ATTACA", "GCAT-GCU"),
                ("G-ATTACA", "GCATG-CU"),
            ],
        },
        Workload {
            seq1: "AAA",
            seq2: "A",
            score: -2,
            rows: vec![("AAA", "--A"), ("AAA", "-A-"), ("AAA", "A--")],
        },
        Workload {
            seq1: "ACGTC",
            seq2: "AGTC",
            score: 6,
            rows: vec![("ACGTC", "A-GTC")],
        },
        Workload {
            seq1: "ACGT",
            seq2: "ACGT",
            score: 8,
            rows: vec![("ACGT", "ACGT")],
        },
        Workload {
            seq1: "AC",
            seq2: "A",
            score: 0,
            rows: vec![("AC", "A-")],
        },
    ];

    for w in workload {
        ensure(&engine, w);
    }
}

#[test]
fn test_rle() {
    let engine = Engine::default();
    let solution = engine.global(&"GATTACA", &"GCATGCU").unwrap();
    let rle: Vec<_> = solution.alignments().iter().map(|x| x.rle()).collect();
    assert_eq!(
        rle,
        vec!["1=2X1=1X1=1X", "1=1v1=1^1=1X1=1X", "1=1v2=1^1X1=1X", "1=1v2=1X1^1=1X"]
    );

    let solution = engine.global(&"GCATGCU", &"GATTACA").unwrap();
    let swapped: Vec<_> = solution.alignments().iter().map(|x| x.rle()).collect();
    assert_eq!(swapped, rle.iter().map(|x| invrle(x)).collect::<Vec<_>>());
}

#[test]
fn test_score_matrix() {
    let engine = Engine::default();
    let solution = engine.global(&"ATTA", &"ATTTTA").unwrap();

    let scores: Vec<Vec<Score>> = solution
        .scores()
        .iter_rows()
        .map(|x| x.to_vec())
        .collect();
    assert_eq!(
        scores,
        vec![
            vec![0, -2, -4, -6, -8, -10, -12],
            vec![-2, 2, 0, -2, -4, -6, -8],
            vec![-4, 0, 4, 2, 0, -2, -4],
            vec![-6, -2, 2, 6, 4, 2, 0],
            vec![-8, -4, 0, 4, 5, 3, 4],
        ]
    );
    // Informational only: the best inner cell differs from the reported corner score
    assert_eq!(*solution.summary(), Some(Summary::new(6, 1)));
    assert!(solution.trace().is_some());
}

#[test]
fn test_identity_per_alignment() {
    let engine = Engine::default();
    let solution = engine.global(&"ATTA", &"ATTTTA").unwrap();
    for aln in solution.alignments() {
        assert_eq!(aln.len(), 6);
        assert_eq!(aln.matches(), 4);
        assert_eq!(aln.mismatches(), 2);
        assert!((aln.identity() - 400.0 / 6.0).abs() < 1e-9);
    }

    let solution = engine.global(&"GATTACA", &"GCATGCU").unwrap();
    let identity: Vec<_> = solution
        .alignments()
        .iter()
        .map(|x| format!("{:.2}", x.identity()))
        .collect();
    assert_eq!(identity, vec!["42.86", "50.00", "50.00", "50.00"]);
}

#[test]
fn test_empty() {
    let engine = Engine::default();

    let solution = engine.global(&"", &"ACG").unwrap();
    assert_eq!(*solution.score(), -6);
    assert_eq!(*solution.summary(), None);
    assert_eq!(solution.alignments().len(), 1);
    assert_eq!(rows(&solution.alignments()[0]), ("---".into(), "ACG".into()));
    assert_eq!(solution.alignments()[0].rle(), "3v");

    let solution = engine.global(&"ACG", &"").unwrap();
    assert_eq!(*solution.score(), -6);
    assert_eq!(rows(&solution.alignments()[0]), ("ACG".into(), "---".into()));

    let solution = engine.global(&"", &"").unwrap();
    assert_eq!(*solution.score(), 0);
    assert_eq!(solution.alignments().len(), 1);
    assert!(solution.alignments()[0].is_empty());
}

#[test]
fn test_custom_scheme() {
    // Any mismatch is cheaper than a pair of gaps
    let engine = dp::Engine::new(scoring::similarity(1, 0, 5));
    let solution = engine.global(&"ACGT", &"AGGT").unwrap();
    assert_eq!(*solution.score(), 3);
    assert_eq!(solution.alignments().len(), 1);
    assert_eq!(solution.alignments()[0].rle(), "1=1X2=");

    let engine: Engine = Params::new(2, -1, 2).into();
    assert_eq!(*engine.global(&"ATTA", &"ATTTTA").unwrap().score(), 4);
}
