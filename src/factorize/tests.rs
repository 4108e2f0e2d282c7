use crate::direction::Direction::{self, *};
use crate::morphism::Morphism;
use crate::word::BoundaryWord;

use paste::paste;

/// The 1 x width rectangle `0^width 1 2^width 3`
fn linear_figure(width: usize) -> BoundaryWord {
    let mut letters = vec![East; width];
    letters.push(North);
    letters.extend(std::iter::repeat(West).take(width));
    letters.push(South);
    BoundaryWord::new(letters).unwrap()
}

fn word(s: &str) -> BoundaryWord {
    s.parse().unwrap()
}

fn check_witness(w: &BoundaryWord) {
    if let Some(f) = w.factorize() {
        assert!(f.morphism.is_non_trivial_homologous());
        assert!(f.morphism.size() < w.len());
        assert_eq!(
            f.morphism.apply(&f.preimage).as_deref(),
            Some(w.rotated(f.offset).letters())
        );
        assert_eq!(w.letters()[f.offset], East);
    }
}

macro_rules! linear {
    ($width:literal, $prime:expr) => {
        paste! {
            #[test]
            fn [<test_linear_figure_ $width>]() {
                let w = linear_figure($width);
                assert_eq!(w.is_prime(), $prime);
                check_witness(&w);
            }
        }
    };
}

linear!(2, true);
linear!(3, true);
linear!(4, false);
linear!(5, true);
linear!(6, false);
linear!(7, true);
linear!(8, false);
linear!(9, false);
linear!(10, false);
linear!(11, true);
linear!(12, false);

#[test]
fn unit_square_is_prime() {
    let w = word("0123");
    assert!(w.is_prime());
    assert_eq!(w.factorize(), None);
}

#[test]
fn square_tetromino_is_composed() {
    let f = word("00112233").factorize().unwrap();
    assert_eq!(f.offset, 0);
    assert_eq!(
        f.morphism,
        Morphism::from_images([vec![East], vec![North, North], vec![West], vec![South, South]])
    );
    // a horizontal domino whose cells are stretched vertically
    assert_eq!(f.preimage, vec![East, East, North, West, West, South]);
    check_witness(&word("00112233"));
}

#[test]
fn witness_prefers_smallest_split() {
    // 3 x 2 rectangle: the image 11 is found while 0 still maps to itself
    let f = word("0001122233").factorize().unwrap();
    assert_eq!(f.offset, 0);
    assert_eq!(f.morphism.image(East), Some(&[East][..]));
    assert_eq!(f.morphism.image(North), Some(&[North, North][..]));
}

#[test]
fn small_shapes_are_prime() {
    for w in ["001223", "01122303", "0001212323"] {
        let w = word(w);
        assert!(w.is_prime(), "{w}");
    }
}

#[test]
fn prime_and_composed_are_exclusive() {
    let words = ["0123", "00112233", "0001122233", "000011222233", "01122303"];
    for w in words.map(word) {
        assert_ne!(w.is_prime(), w.factorize().is_some());
        check_witness(&w);
    }
}

#[test]
fn rotation_does_not_change_primality() {
    let w = word("000011222233");
    for offset in 0..w.len() {
        let r = w.rotated(offset);
        assert!(!r.is_prime(), "{r}");
        check_witness(&r);
    }
}

#[test]
fn unused_letters_are_not_decoded() {
    let letters: Vec<Direction> = word("0123").letters().to_vec();
    assert_eq!(Morphism::new().apply(&letters), None);
}
