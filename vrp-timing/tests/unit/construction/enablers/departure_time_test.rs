use super::*;
use crate::construction::enablers::update_route_schedule;
use crate::helpers::models::problem::*;
use crate::helpers::models::solution::*;
use crate::models::common::TimeWindow;
use crate::models::problem::SimpleActivityCost;

parameterized_test! {can_get_waiting_free_departure, (departure, first_tw, expected), {
    can_get_waiting_free_departure_impl(departure, TimeWindow::new(first_tw.0, first_tw.1), expected);
}}

can_get_waiting_free_departure! {
    case01_waiting: (0., (25., 100.), Some(15.)),
    case02_no_waiting: (0., (0., 100.), Some(0.)),
    case03_exact_arrival: (0., (10., 100.), Some(0.)),
    case04_late_departure: (20., (25., 100.), Some(20.)),
}

fn can_get_waiting_free_departure_impl(departure: Timestamp, first_tw: TimeWindow, expected: Option<Timestamp>) {
    let route = RouteBuilder::default()
        .with_departure(departure)
        .add_activity(test_activity_with_location_and_tw(10, first_tw))
        .add_activity(test_activity_with_location_and_tw(20, TimeWindow::new(0., 100.)))
        .build();

    let result = get_waiting_free_departure(&route, &TestTransportCost::default());

    assert_eq!(result, expected);
}

#[test]
fn can_get_no_departure_for_empty_route() {
    let route = RouteBuilder::default().build();

    assert_eq!(get_waiting_free_departure(&route, &TestTransportCost::default()), None);
}

parameterized_test! {can_advance_departure_time, (first_tw, expected_shift, expected_first_arrival), {
    let mut route_ctx = RouteContextBuilder::default()
        .with_route(
            RouteBuilder::default()
                .add_activity(test_activity_with_location_and_tw(10, TimeWindow::new(first_tw.0, first_tw.1)))
                .add_activity(test_activity_with_location_and_tw(20, TimeWindow::new(0., 100.)))
                .build(),
        )
        .build();
    let (activity, transport) = (SimpleActivityCost::default(), TestTransportCost::default());
    update_route_schedule(&mut route_ctx, &activity, &transport);

    let shift = advance_departure_time(&mut route_ctx, &activity, &transport);

    assert_eq!(shift, expected_shift);
    assert_eq!(route_ctx.route().tour.get(1).map(|first| first.schedule.arrival), Some(expected_first_arrival));
}}

can_advance_departure_time! {
    case01_shift: ((25., 100.), Some(15.), 25.),
    case02_no_shift: ((5., 100.), None, 10.),
}
