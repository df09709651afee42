#[cfg(test)]
mod tests {
    use bounded_dirichlet::{
        bounded::{sample_bounded_dirichlet, sample_bounded_dirichlet_into, BoundedDirichlet},
        error::BoundedDirichletError,
        gamma::{ConstantGammaSource, RngGammaSource},
    };


    #[test]
    pub fn test_shares_of_300_within_fifty() -> Result<(), BoundedDirichletError> {
        let mut source = RngGammaSource::seed_from_u64(300);
        let mut rn = [0.; 30];
        let (lo, hi, sum) = (-50., 50., 300.);
        let mut infeasible = 0;

        for _ in 0..1000 {
            let feasible = sample_bounded_dirichlet_into(&mut source, 16., sum, lo, hi, &mut rn)?;

            let total: f64 = rn.iter().sum();
            assert!((total - sum).abs() < 1e-9 * sum, "Sum was {}", total);
            assert!(rn.iter().all(|r| *r >= lo));
            assert_eq!(feasible, rn.iter().all(|r| *r <= hi));

            if !feasible {
                infeasible += 1;
            }
        }

        // alpha of 16 is dispersed enough to exceed the upper bound some of the time
        assert!(infeasible > 0 && infeasible < 1000, "{} infeasible samples", infeasible);

        Ok(())
    }

    #[test]
    pub fn test_zero_sum_pair() -> Result<(), BoundedDirichletError> {
        let mut source = RngGammaSource::seed_from_u64(2);
        let mut firsts = Vec::new();

        for _ in 0..2000 {
            let sample = sample_bounded_dirichlet(&mut source, 1., 0., -1., 1., 2)?;

            assert!(sample.total().abs() < 1e-12, "Sum was {}", sample.total());
            assert!(sample.values.iter().all(|r| (-1.0..=1.0).contains(r)));
            assert!(sample.feasible);

            firsts.push(sample.values[0]);
        }

        // with alpha of 1 the first share is uniform on [-1, 1]
        let mean = firsts.iter().sum::<f64>() / firsts.len() as f64;
        let below_zero = firsts.iter().filter(|r| **r < 0.).count();
        assert!(mean.abs() < 0.06, "Mean was {}", mean);
        assert!((900..1100).contains(&below_zero), "{} below zero", below_zero);
        assert!(firsts.iter().any(|r| *r < -0.9));
        assert!(firsts.iter().any(|r| *r > 0.9));

        Ok(())
    }

    #[test]
    pub fn test_mean_on_upper_bound_concentrates() -> Result<(), BoundedDirichletError> {
        let mut source = RngGammaSource::seed_from_u64(100);

        for _ in 0..100 {
            let sample = sample_bounded_dirichlet(&mut source, 100., 10., 0., 1., 10)?;

            assert!((sample.total() - 10.).abs() < 1e-9);
            assert!(sample.values.iter().all(|r| (r - 1.).abs() < 0.5), "{:?}", sample.values);
            // the sum pins the values to an average of exactly hi, so any spread exceeds it
            assert_eq!(sample.feasible, sample.exceeding(1.).is_empty());
        }

        Ok(())
    }

    #[test]
    pub fn test_equal_bounds_fail_before_sampling() {
        let mut source = ConstantGammaSource::new(1.);
        let mut rn = [3.; 10];

        let result = sample_bounded_dirichlet_into(&mut source, 1., 50., 5., 5., &mut rn);

        assert!(matches!(result, Err(BoundedDirichletError::InvalidArgument(_))));
        assert_eq!(rn, [3.; 10]);
        assert_eq!(source.draws, 0);
    }

    #[test]
    pub fn test_mean_outside_bounds() {
        let mut source = ConstantGammaSource::new(1.);

        let result = sample_bounded_dirichlet(&mut source, 1., 1000., 0., 1., 10);

        assert!(matches!(result, Err(BoundedDirichletError::InvalidArgument(_))));
        assert_eq!(source.draws, 0);
    }

    #[test]
    pub fn test_alpha_zero_always_fails() {
        let mut source = RngGammaSource::seed_from_u64(0);

        for (sum, lo, hi, n) in [(300., -50., 50., 30), (0., -1., 1., 2), (10., 0., 1., 10), (1000., 0., 1., 10)] {
            let err = sample_bounded_dirichlet(&mut source, 0., sum, lo, hi, n).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    pub fn test_symmetric_draws_give_mean() -> Result<(), BoundedDirichletError> {
        let params = BoundedDirichlet::new(5., 12., -4., 8., 8)?;
        let mut source = ConstantGammaSource::new(1.);

        let sample = params.sample(&mut source)?;

        assert!(sample.feasible);
        assert_eq!(sample.values, vec![params.mean(); 8]);
        assert_eq!(source.draws, 8);

        Ok(())
    }
}
