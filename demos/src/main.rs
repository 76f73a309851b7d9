use affine_align::Scoring;

/// Mirrors the root crate's doctest, kept as a standalone runnable example
/// the way this crate's sibling `example` crate did for its Gotoh aligner.
fn main() {
    let x = b"ATGATGATG";
    let y = b"ATGAATG";
    let scoring = Scoring::new(2, -1, -5, -1);

    let (aligned_x, aligned_y, score) = affine_align::align(x, y, &scoring).unwrap();
    println!("{}", String::from_utf8_lossy(&aligned_x));
    println!("{}", String::from_utf8_lossy(&aligned_y));
    println!("score: {score}");
}
