use approx::assert_relative_eq;
use integration_tests::{BENCH_LENGTHS, bench_parameters, meters};
use tubedrain_model::{DrainConfig, DrainParameters, FlowError, Termination};
use tubedrain_solvers::{
    drain::{self, Status},
    sweep,
};
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Ratio, Time},
    length::meter,
    ratio::ratio,
    time::second,
};

#[test]
fn reference_scenario_drains_to_target() {
    let params = DrainParameters::new(DrainConfig {
        bin_width: meters(0.32),
        bin_length: meters(0.26),
        bin_height: meters(0.08),
        end_height: meters(0.02),
        total_height_change: meters(0.08),
        tube_diameter: meters(0.00794),
        gravity: Acceleration::new::<meter_per_second_squared>(9.8),
        slope: Ratio::new::<ratio>(1.0 / 150.0),
        time_step: Time::new::<second>(0.1),
        tube_lengths: vec![meters(0.3)],
        ..DrainConfig::default()
    })
    .unwrap();

    let solution = drain::solve_unobserved(&params, meters(0.3), &params.termination()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.elapsed.get::<second>() < 500.0);

    let start = params.start_height(meters(0.3)).get::<meter>();
    let last = solution.last().unwrap();
    let overshoot = last.height_delta.get::<meter>();

    for record in &solution.history {
        let h = record.height.get::<meter>();
        assert!(h <= start);
        assert!(h >= start - 0.08 - overshoot);
    }

    // The surface ends just past the target drop.
    assert!(solution.total_drop.get::<meter>() >= 0.08);
    assert!(solution.total_drop.get::<meter>() - overshoot < 0.08);
    assert_relative_eq!(
        last.height.get::<meter>(),
        start - solution.total_drop.get::<meter>(),
        max_relative = 1e-9
    );
}

#[test]
fn sweep_returns_one_trajectory_per_length_in_order() {
    let params = bench_parameters();

    let solutions = sweep(&params, &params.termination()).unwrap();

    assert_eq!(solutions.len(), BENCH_LENGTHS.len());
    for (solution, length) in solutions.iter().zip(BENCH_LENGTHS) {
        assert_relative_eq!(solution.tube_length.get::<meter>(), length);
        assert_eq!(solution.status, Status::Converged);
        assert!(!solution.history.is_empty());
        assert!(solution.elapsed.get::<second>() < 500.0);
    }
}

#[test]
fn trajectories_export_si_tuples() {
    let params = bench_parameters();
    let solution = drain::solve_unobserved(&params, meters(0.2), &params.termination()).unwrap();

    let rows: Vec<_> = solution.history.iter().map(|r| r.as_si_tuple()).collect();

    let (t0, v1, v2, h, volume, dh, dv) = rows[0];
    assert_eq!(t0, 0.0);
    assert!(v1 > 0.0 && v2 > v1);
    assert!(h < params.start_height(meters(0.2)).get::<meter>());
    assert!(volume > 0.0 && dh > 0.0 && dv > 0.0);

    assert!(rows.windows(2).all(|pair| pair[1].0 > pair[0].0));
}

#[test]
fn reynolds_number_is_a_diagnostic_only() {
    let params = bench_parameters();
    let solution = drain::solve_unobserved(&params, meters(0.4), &params.termination()).unwrap();

    let reynolds: Vec<f64> = solution
        .history
        .iter()
        .map(|record| params.tube_reynolds_number(record.v2).get::<ratio>())
        .collect();

    // Outflow slows as the head drops, so the Reynolds number follows.
    assert!(reynolds.iter().all(|re| *re > 0.0));
    assert!(reynolds.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn empty_trajectories_at_the_stop_boundaries() {
    let params = bench_parameters();

    let no_drop = Termination::new(meters(0.0), Time::new::<second>(500.0)).unwrap();
    let solution = drain::solve_unobserved(&params, meters(0.3), &no_drop).unwrap();
    assert!(solution.history.is_empty());

    let no_time = Termination::new(meters(0.08), Time::new::<second>(0.05)).unwrap();
    let solution = drain::solve_unobserved(&params, meters(0.3), &no_time).unwrap();
    assert!(solution.history.is_empty());
    assert_eq!(solution.status, Status::TimeLimit);
}

#[test]
fn overdrawn_target_fails_instead_of_producing_nan() {
    let params = bench_parameters();
    let termination = Termination::new(meters(0.5), Time::new::<second>(2000.0)).unwrap();

    let err = drain::solve_unobserved(&params, meters(0.6), &termination).unwrap_err();

    match err {
        drain::Error::Flow {
            source: FlowError::NegativeHead { meters: height },
            ..
        } => assert!(height < 0.0),
        other => panic!("unexpected error: {other}"),
    }
}
