use persistent_bst::quaternion::Quaternion;

/// Small integer coefficients keep every product exact in `f64`.
fn quaternion(coefficients: (i16, i16, i16, i16)) -> Quaternion {
    let (a, b, c, d) = coefficients;
    Quaternion::new(a.into(), b.into(), c.into(), d.into())
}

#[quickcheck]
fn addition_commutes(p: (i16, i16, i16, i16), q: (i16, i16, i16, i16)) -> bool {
    let (p, q) = (quaternion(p), quaternion(q));

    p + q == q + p
}

#[quickcheck]
fn conjugate_reverses_products(p: (i16, i16, i16, i16), q: (i16, i16, i16, i16)) -> bool {
    let (p, q) = (quaternion(p), quaternion(q));

    (p * q).conjugate() == q.conjugate() * p.conjugate()
}

#[quickcheck]
fn times_conjugate_is_real(q: (i16, i16, i16, i16)) -> bool {
    let q = quaternion(q);
    let [a, b, c, d] = q.coefficients();

    q * q.conjugate() == Quaternion::new(a * a + b * b + c * c + d * d, 0.0, 0.0, 0.0)
}

#[quickcheck]
fn display_is_zero_only_for_zero(q: (i16, i16, i16, i16)) -> bool {
    let q = quaternion(q);

    (q.to_string() == "0") == (q == Quaternion::ZERO)
}
