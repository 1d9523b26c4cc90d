/// Fraction of predictions equal to the true labels.
/// Returns `NaN` for empty input.
pub fn accuracy<T, P>(y_true: &[T], y_pred: &[P]) -> f64
where
    T: AsRef<str>,
    P: AsRef<str>,
{
    let correct = y_true
        .iter()
        .zip(y_pred)
        .filter(|&(t, p)| {
            let (t, p): (&str, &str) = (t.as_ref(), p.as_ref());
            t == p
        })
        .count();
    correct as f64 / y_true.len() as f64
}
