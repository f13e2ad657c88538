/// A real-valued function of one real variable.
///
/// Solvers treat a `Function` as a black-box oracle: they may call it any
/// number of times, in any order, and assume each call has no side effects.
/// The same trait describes a derivative, which is just another oracle.
///
/// Closures of type `Fn(f64) -> f64` implement `Function` automatically.
pub trait Function {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

/// Blanket implementation for plain closures and function pointers.
impl<F> Function for F
where
    F: Fn(f64) -> f64 + ?Sized,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64) -> f64 {
        x * x
    }

    fn eval_at<F: Function>(f: &F, x: f64) -> f64 {
        f.eval(x)
    }

    #[test]
    fn closures_are_functions() {
        let offset = 4.0;
        let f = |x: f64| x - offset;
        assert_eq!(eval_at(&f, 6.0), 2.0);
    }

    #[test]
    fn fn_pointers_are_functions() {
        assert_eq!(eval_at(&square, 3.0), 9.0);
    }

    #[test]
    fn trait_objects_are_functions() {
        let f: &dyn Fn(f64) -> f64 = &|x: f64| x + 1.0;
        assert_eq!(f.eval(1.0), 2.0);
    }

    #[test]
    fn references_forward_through_blanket_impl() {
        let f = |x: f64| 2.0 * x;
        let by_ref = &f;
        assert_eq!(eval_at(&by_ref, 1.5), 3.0);
    }
}
