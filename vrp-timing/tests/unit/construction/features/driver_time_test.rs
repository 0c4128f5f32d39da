use super::*;
use crate::helpers::construction::features::*;
use crate::helpers::models::problem::*;
use crate::helpers::models::solution::*;
use crate::models::common::{Distance, Location, TimeWindow};
use crate::models::problem::{Actor, SimpleActivityCost};
use crate::models::solution::Route;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const TARGET_LOCATION: Location = 15;

fn create_route(latest_arrival: Timestamp, prev_tw: (f64, f64), next_tw: (f64, f64)) -> Route {
    RouteBuilder::default()
        .with_actor(test_actor_with_vehicle(VehicleBuilder::default().latest_arrival(latest_arrival).build()))
        .add_activity(test_activity_with_location_and_tw(10, TimeWindow::new(prev_tw.0, prev_tw.1)))
        .add_activity(test_activity_with_location_and_tw(20, TimeWindow::new(next_tw.0, next_tw.1)))
        .build()
}

fn create_route_ctx_with_states(route: Route, states: Option<Vec<Timestamp>>) -> RouteContext {
    RouteContextBuilder::default()
        .with_route(route)
        .with_state(|state| {
            if let Some(states) = states {
                state.set_latest_activity_start_states(states);
            }
        })
        .build()
}

fn evaluate_insertion(
    constraint: &dyn FeatureConstraint,
    route_ctx: &RouteContext,
    index: usize,
    target: (Location, (f64, f64)),
    prev_departure: Timestamp,
) -> ConstraintStatus {
    let job = test_job_with_location_and_tw(target.0, TimeWindow::new(target.1.0, target.1.1));
    let target = Activity::new_with_job(job.clone());
    let tour = &route_ctx.route().tour;

    let insertion_ctx = InsertionContext { route_ctx, job: &job, actor: &route_ctx.route().actor, departure: 0. };
    let activity_ctx =
        ActivityContext { index, prev: tour.get(index).unwrap(), target: &target, next: tour.get(index + 1).unwrap() };

    constraint.evaluate(&insertion_ctx, &activity_ctx, prev_departure)
}

parameterized_test! {can_evaluate_insertion_between_two_activities, (latest_arrival, states, target_tw, expected), {
    can_evaluate_insertion_between_two_activities_impl(latest_arrival, states, target_tw, expected);
}}

can_evaluate_insertion_between_two_activities! {
    case01_target_ends_before_prev_starts: (
        100., vec![0., 20., 20., 100.], (0., 9.), ConstraintStatus::NotFulfilledBreak
    ),
    case02_target_starts_after_next_ends: (100., vec![0., 20., 20., 100.], (25., 30.), ConstraintStatus::NotFulfilled),
    case03_propagated_next_is_violated: (100., vec![0., 10., 15., 100.], (10., 15.), ConstraintStatus::NotFulfilled),
    case04_vehicle_arrives_too_late: (19., vec![0., 9., 19., 19.], (10., 15.), ConstraintStatus::NotFulfilledBreak),
    case05_feasible: (100., vec![0., 20., 20., 100.], (10., 15.), ConstraintStatus::Fulfilled),
}

fn can_evaluate_insertion_between_two_activities_impl(
    latest_arrival: Timestamp,
    states: Vec<Timestamp>,
    target_tw: (f64, f64),
    expected: ConstraintStatus,
) {
    let route_ctx = create_route_ctx_with_states(create_route(latest_arrival, (10., 20.), (0., 20.)), Some(states));

    [Duration::MAX, 1000.].into_iter().for_each(|max_driver_time| {
        let feature = create_driver_time_feature(max_driver_time);

        let result = evaluate_insertion(&feature, &route_ctx, 1, (TARGET_LOCATION, target_tw), 10.);

        assert_eq!(result, expected);
    });
}

parameterized_test! {can_evaluate_insertion_at_prev_location, (latest_arrival, states, target_tw, max_time, expected), {
    let route_ctx = create_route_ctx_with_states(create_route(latest_arrival, (10., 20.), (0., 20.)), Some(states));
    let feature = create_driver_time_feature(max_time);

    let result = evaluate_insertion(&feature, &route_ctx, 1, (10, target_tw), 10.);

    assert_eq!(result, expected);
}}

can_evaluate_insertion_at_prev_location! {
    case01_served_before_prev: (100., vec![0., 20., 20., 100.], (0., 9.), 100., ConstraintStatus::NotFulfilledBreak),
    case02_served_after_next: (100., vec![0., 20., 20., 100.], (25., 30.), 100., ConstraintStatus::NotFulfilled),
    case03_served_after_latest_next: (100., vec![0., 20., 15., 100.], (10., 15.), 100., ConstraintStatus::NotFulfilled),
    case04_vehicle_arrives_too_late: (
        19., vec![0., 9., 19., 19.], (10., 15.), 100., ConstraintStatus::NotFulfilledBreak
    ),
    case05_driver_time_not_enough: (
        100., vec![0., 9., 19., 100.], (10., 15.), 19., ConstraintStatus::NotFulfilledBreak
    ),
    case06_driver_time_enough: (100., vec![0., 10., 20., 100.], (10., 15.), 30., ConstraintStatus::Fulfilled),
}

parameterized_test! {can_limit_depot_arrival_by_driver_time, (max_driver_time, expected), {
    let route_ctx = create_route_ctx_with_states(create_route(100., (0., 100.), (0., 35.)), None);
    let feature = create_driver_time_feature(max_driver_time);

    let result = evaluate_insertion(&feature, &route_ctx, 1, (30, (0., 100.)), 10.);

    assert_eq!(result, expected);
}}

can_limit_depot_arrival_by_driver_time! {
    case01_driver_time_reached: (30., ConstraintStatus::NotFulfilledBreak),
    case02_only_next_window_violated: (100., ConstraintStatus::NotFulfilled),
}

#[test]
fn can_limit_depot_arrival_by_propagated_driver_time() {
    let feature = create_driver_time_feature(30.);
    let route_ctx = create_accepted_route_ctx(create_route(100., (0., 100.), (0., 35.)), &feature);

    assert_eq!(route_ctx.state().get_latest_arrival_at_depot().copied(), Some(30.));
    assert_eq!(evaluate_insertion(&feature, &route_ctx, 1, (30, (0., 100.)), 10.), ConstraintStatus::NotFulfilledBreak);
}

parameterized_test! {can_check_driver_time_when_inserting_after_start, (max_driver_time, target_tw, expected), {
    let feature = create_driver_time_feature(max_driver_time);
    let route = RouteBuilder::default().add_activities(test_activities_at(&[20])).build();
    let mut route_ctx = RouteContext::new_with_state(route, Default::default());
    update_route_schedule(&mut route_ctx, feature.activity(), feature.transport());
    route_ctx.mark_stale(false);

    let result = evaluate_insertion(&feature, &route_ctx, 0, (5, target_tw), 0.);

    assert_eq!(result, expected);
}}

can_check_driver_time_when_inserting_after_start! {
    case01_exceeds_limit: (30., (0., 100.), ConstraintStatus::NotFulfilled),
    case02_shifted_departure_fits: (30., (15., 100.), ConstraintStatus::Fulfilled),
    case03_enough_time: (100., (0., 100.), ConstraintStatus::Fulfilled),
}

parameterized_test! {can_fallback_to_static_time_windows, (states, is_stale, expected), {
    let feature = create_driver_time_feature(Duration::MAX);
    let mut route_ctx = create_route_ctx_with_states(create_route(100., (10., 20.), (0., 20.)), Some(states));
    route_ctx.mark_stale(is_stale);

    let result = evaluate_insertion(&feature, &route_ctx, 1, (TARGET_LOCATION, (10., 15.)), 10.);

    assert_eq!(result, expected);
}}

can_fallback_to_static_time_windows! {
    case01_valid_states: (vec![0., 10., 15., 100.], false, ConstraintStatus::NotFulfilled),
    case02_stale_states: (vec![0., 10., 15., 100.], true, ConstraintStatus::Fulfilled),
    case03_mismatched_states: (vec![0., 10., 15.], false, ConstraintStatus::Fulfilled),
}

#[test]
fn can_ignore_states_of_other_actor() {
    let feature = create_driver_time_feature(Duration::MAX);
    let route_ctx =
        create_route_ctx_with_states(create_route(100., (10., 20.), (0., 20.)), Some(vec![0., 10., 15., 100.]));
    let other_actor = test_actor_with_vehicle(VehicleBuilder::default().latest_arrival(100.).build());
    let job = test_job_with_location_and_tw(TARGET_LOCATION, TimeWindow::new(10., 15.));
    let target = Activity::new_with_job(job.clone());
    let tour = &route_ctx.route().tour;

    let insertion_ctx = InsertionContext { route_ctx: &route_ctx, job: &job, actor: &other_actor, departure: 0. };
    let activity_ctx =
        ActivityContext { index: 1, prev: tour.get(1).unwrap(), target: &target, next: tour.get(2).unwrap() };

    assert_eq!(feature.evaluate(&insertion_ctx, &activity_ctx, 10.), ConstraintStatus::Fulfilled);
}

/// A transport where the direct connection between 10 and 20 is slower than a detour.
struct DetourTransportCost {}

impl TransportCost for DetourTransportCost {
    fn duration(&self, _: &Actor, from: Location, to: Location, _: TravelTime) -> Duration {
        if (from, to) == (10, 20) { 50. } else { fake_routing(from, to) }
    }

    fn distance(&self, _: &Actor, from: Location, to: Location, _: TravelTime) -> Distance {
        fake_routing(from, to)
    }
}

#[test]
fn can_stop_when_direct_arrival_violates_propagated_next() {
    let feature = DriverTimeFeatureBuilder::new("driver_time")
        .set_transport(Arc::new(DetourTransportCost {}))
        .set_activity(Arc::new(SimpleActivityCost::default()))
        .build()
        .unwrap();
    let route_ctx =
        create_route_ctx_with_states(create_route(100., (0., 100.), (0., 100.)), Some(vec![0., 0., 40., 100.]));

    let result = evaluate_insertion(&feature, &route_ctx, 1, (TARGET_LOCATION, (0., 100.)), 10.);

    assert_eq!(result, ConstraintStatus::NotFulfilledBreak);
}

parameterized_test! {can_validate_builder, (has_transport, max_driver_time, expected), {
    let builder = DriverTimeFeatureBuilder::new("driver_time").set_activity(test_activity_cost());
    let builder = if has_transport { builder.set_transport(TestTransportCost::new_shared()) } else { builder };
    let builder = match max_driver_time {
        Some(max_driver_time) => builder.set_max_driver_time(max_driver_time),
        None => builder,
    };

    let result = builder.build().map(|feature| feature.max_driver_time());

    assert_eq!(result, expected.map_err(|err: &str| GenericError::from(err)));
}}

can_validate_builder! {
    case01_no_limit: (true, None, Ok(Duration::MAX)),
    case02_limit: (true, Some(21.), Ok(21.)),
    case03_no_transport: (false, Some(21.), Err("transport must be set")),
    case04_zero_limit: (true, Some(0.), Err("max driver time should be positive, got: 0")),
    case05_negative_limit: (true, Some(-1.), Err("max driver time should be positive, got: -1")),
    case06_nan_limit: (true, Some(f64::NAN), Err("max driver time should be positive, got: NaN")),
}

#[test]
fn can_accept_route_state() {
    let feature = create_driver_time_feature(60.);
    let route = RouteBuilder::default().add_activities(test_activities_at(&[10, 20, 30])).build();
    let mut route_ctx = RouteContext::new_with_state(route, Default::default());

    feature.accept_route_state(&mut route_ctx);

    assert!(!route_ctx.is_stale());
    assert_eq!(route_ctx.route().tour.end().map(|end| end.schedule.arrival), Some(60.));
    assert_eq!(route_ctx.state().get_latest_arrival_at_depot().copied(), Some(60.));
    assert_eq!(route_ctx.state().get_latest_activity_start_states().cloned(), Some(vec![0., 10., 20., 30., 60.]));
}

parameterized_test! {can_accept_solution_state_of_stale_routes_only, is_parallel, {
    let feature = DriverTimeFeatureBuilder::new("driver_time")
        .set_transport(TestTransportCost::new_shared())
        .set_activity(test_activity_cost())
        .set_max_driver_time(60.)
        .set_environment(&Environment::new_silent(is_parallel))
        .build()
        .unwrap();
    let create_stale_route_ctx = || {
        RouteContext::new_with_state(
            RouteBuilder::default().add_activities(test_activities_at(&[10, 20, 30])).build(),
            Default::default(),
        )
    };
    let fresh_route_ctx = RouteContextBuilder::default()
        .with_route(RouteBuilder::default().add_activities(test_activities_at(&[10])).build())
        .with_state(|state| state.set_latest_arrival_at_depot(1.))
        .build();
    let mut solution_ctx =
        SolutionContext { routes: vec![create_stale_route_ctx(), fresh_route_ctx, create_stale_route_ctx()] };

    feature.accept_solution_state(&mut solution_ctx);

    assert!(solution_ctx.routes.iter().all(|route_ctx| !route_ctx.is_stale()));
    let depot_states = solution_ctx
        .routes
        .iter()
        .map(|route_ctx| route_ctx.state().get_latest_arrival_at_depot().copied())
        .collect::<Vec<_>>();
    assert_eq!(depot_states, vec![Some(60.), Some(1.), Some(60.)]);
}}

can_accept_solution_state_of_stale_routes_only! {
    case01_sequential: false,
    case02_parallel: true,
}

#[test]
fn can_accept_insertion() {
    let feature = create_driver_time_feature(60.);
    let mut solution_ctx = SolutionContext {
        routes: vec![RouteContext::new_with_state(
            RouteBuilder::default().add_activities(test_activities_at(&[10])).build(),
            Default::default(),
        )],
    };
    let job = test_job_with_location_and_tw(20, TimeWindow::max());

    feature.accept_insertion(&mut solution_ctx, 0, &job);
    feature.accept_insertion(&mut solution_ctx, 1, &job);

    assert!(!solution_ctx.routes[0].is_stale());
}

parameterized_test! {can_classify_constraint_status, (status, is_fulfilled, is_stopped), {
    assert_eq!(status.is_fulfilled(), is_fulfilled);
    assert_eq!(status.is_stopped(), is_stopped);
}}

can_classify_constraint_status! {
    case01_fulfilled: (ConstraintStatus::Fulfilled, true, false),
    case02_not_fulfilled: (ConstraintStatus::NotFulfilled, false, false),
    case03_not_fulfilled_break: (ConstraintStatus::NotFulfilledBreak, false, true),
}

#[test]
fn can_keep_same_statuses_without_driver_time_limit_on_random_routes() {
    let mut rng = SmallRng::seed_from_u64(7);
    let unlimited = create_driver_time_feature(Duration::MAX);
    let large = create_driver_time_feature(1E9);

    (0..200).for_each(|_| {
        let activities = (0..rng.gen_range(1..6))
            .map(|_| {
                let start = rng.gen_range(0..100) as f64;
                let end = start + rng.gen_range(0..100) as f64;
                let duration = rng.gen_range(0..5) as f64;
                test_activity_with_duration(rng.gen_range(1..50), TimeWindow::new(start, end), duration)
            })
            .collect::<Vec<_>>();
        let latest_arrival = rng.gen_range(100..500) as f64;
        let route = RouteBuilder::default()
            .with_actor(test_actor_with_vehicle(VehicleBuilder::default().latest_arrival(latest_arrival).build()))
            .add_activities(activities)
            .build();
        let unlimited_route_ctx = create_accepted_route_ctx(route.clone(), &unlimited);
        let large_route_ctx = create_accepted_route_ctx(route, &large);

        (0..3).for_each(|_| {
            let start = rng.gen_range(0..150) as f64;
            let tw = TimeWindow::new(start, start + rng.gen_range(0..100) as f64);
            let job = test_job_with_duration(rng.gen_range(1..50), tw, rng.gen_range(0..5) as f64);

            (0..unlimited_route_ctx.route().tour.total() - 1).for_each(|leg_idx| {
                let position = InsertionPosition::Concrete(leg_idx);
                let unlimited_ctx = InsertionContext::new(&unlimited_route_ctx, &job);
                let large_ctx = InsertionContext::new(&large_route_ctx, &job);

                let unlimited_result = eval_job_insertion_in_route(&unlimited, &unlimited_ctx, position);
                let large_result = eval_job_insertion_in_route(&large, &large_ctx, position);

                assert_eq!(unlimited_result, large_result);
            });
        });
    });
}
