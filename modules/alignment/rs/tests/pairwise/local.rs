use seqsim_alignment_rs::pairwise::dp::{traceback, Variant};
use seqsim_alignment_rs::pairwise::scoring;

use super::*;

struct Workload<'a> {
    seq1: (&'a [u8], usize),
    seq2: (&'a [u8], usize),
    score: Score,
    rle: &'a str,
}

fn ensure(engine: &Engine, w: Workload<'_>) {
    let invrle = invrle(w.rle);

    for (seq1, seq2, rle) in [(w.seq1, w.seq2, w.rle), (w.seq2, w.seq1, &invrle)] {
        let solution = engine.local(&seq1.0, &seq2.0).unwrap();
        assert_eq!(*solution.variant(), Variant::Local);
        assert_eq!(solution.alignments().len(), 1);

        let result = solution.best().unwrap();
        assert_eq!(result.seq1().start, seq1.1);
        assert_eq!(result.seq2().start, seq2.1);
        assert_eq!(*result.score(), w.score);
        assert_eq!(*solution.score(), w.score);
        assert_eq!(result.rle(), rle);
    }
}

#[test]
fn test_no_gaps() {
    let engine = Engine::default();
    let workload = vec![
        Workload {
            seq1: (b"AAGAA", 1),
            seq2: (b"AGA", 0),
            score: 6,
            rle: "3=",
        },
        Workload {
            seq1: (b"AGTCCCGTGTCCCAGGGG", 0),
            seq2: (b"AGTC", 0),
            score: 8,
            rle: "4=",
        },
        Workload {
            seq1: (b"CGCGCGCGTTT", 6),
            seq2: (b"CGTTT", 0),
            score: 10,
            rle: "5=",
        },
        Workload {
            seq1: (b"AAAGGGAGGGTTTA", 3),
            seq2: (b"GGGGGGG", 0),
            score: 11,
            rle: "3=1X3=",
        },
        Workload {
            seq1: (b"TTTTACGTTT", 4),
            seq2: (b"GGACGTGG", 2),
            score: 8,
            rle: "4=",
        },
        Workload {
            seq1: (b"ACGT", 0),
            seq2: (b"ACGT", 0),
            score: 8,
            rle: "4=",
        },
    ];

    for w in workload {
        ensure(&engine, w);
    }
}

#[test]
fn test_gaps() {
    let engine = Engine::default();
    let workload = vec![
        Workload {
            seq1: (b"PAWHEAE", 1),
            seq2: (b"HDAGAWGHEQ", 4),
            score: 6,
            rle: "2=1v2=",
        },
        Workload {
            seq1: (b"ACGTACGTTTACGT", 0),
            seq2: (b"ACGTACGTACGT", 0),
            score: 20,
            rle: "7=2^5=",
        },
    ];

    for w in workload {
        ensure(&engine, w);
    }
}

#[test]
fn test_scenario() {
    let engine = Engine::default();
    let (x, y) = ("PAWHEAE", "HDAGAWGHEQ");
    let solution = engine.local(&x, &y).unwrap();

    assert_eq!(traceback::local_start(solution.scores()), Some((5, 9)));
    let aln = solution.best().unwrap();
    assert_eq!(rows(aln), ("AW-HE".into(), "AWGHE".into()));
    assert_eq!(*aln.seq1(), 1..5);
    assert_eq!(*aln.seq2(), 4..9);
    assert_eq!(format!("{:.2}", aln.identity()), "80.00");
    assert_eq!(aln.mismatches(), 1);
    assert_eq!(*solution.summary(), None);

    let solution = engine.local(&y, &x).unwrap();
    assert_eq!(traceback::local_start(solution.scores()), Some((9, 5)));
    assert_eq!(rows(solution.best().unwrap()), ("AWGHE".into(), "AW-HE".into()));
}

#[test]
fn test_tie_breaking_depends_on_order() {
    // Equal scores, but the scan order and the branch priority pick different paths
    let engine = Engine::default();

    let solution = engine.local(&"GGATCGA", &"GAATTCAGTTA").unwrap();
    let aln = solution.best().unwrap();
    assert_eq!(*aln.score(), 5);
    assert_eq!(rows(aln), ("GGATCGA".into(), "GAATTCA".into()));
    assert_eq!(aln.rle(), "1=1X2=2X1=");

    let solution = engine.local(&"GAATTCAGTTA", &"GGATCGA").unwrap();
    let aln = solution.best().unwrap();
    assert_eq!(*aln.score(), 5);
    assert_eq!(rows(aln), ("GAATTCAG".into(), "GGA-TC-G".into()));
    assert_eq!(aln.rle(), "1=1X1=1^2=1^1=");
}

#[test]
fn test_empty() {
    let engine = Engine::default();
    let workload: Vec<(&[u8], &[u8])> = vec![
        (b"ACGT", b""),
        (b"", b"ACGT"),
        (b"", b""),
        (b"A", b"B"),
        (b"ACGT", b"----"),
    ];

    for (seq1, seq2) in workload {
        let solution = engine.local(&seq1, &seq2).unwrap();
        assert_eq!(*solution.score(), 0);
        assert_eq!(solution.alignments().len(), 1);

        let aln = solution.best().unwrap();
        assert!(aln.is_empty());
        assert_eq!(*aln.seq1(), 0..0);
        assert_eq!(*aln.seq2(), 0..0);
        assert_eq!(aln.identity(), 0.0);
    }
}

#[test]
fn test_custom_scheme() {
    let engine = dp::Engine::new(scoring::similarity(1, -2, 1));
    let solution = engine.local(&"TTTACGTTT", &"GGGACGGGG").unwrap();
    let aln = solution.best().unwrap();
    assert_eq!(*aln.score(), 3);
    assert_eq!(aln.rle(), "3=");
    assert_eq!(aln.seq1().start, 3);
    assert_eq!(aln.seq2().start, 3);
}
