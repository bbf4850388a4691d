//! Property-based tests for the runtime and the concrete machines.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated input sequences.

use proptest::prelude::*;
use stepwise::machines::{
    Accumulator, Average2, Delay, Gain, GatePosition, GateReading, Money, SimpleParkingGate,
    Token, UpDown, VendingMachine,
};
use stepwise::{StateMachine, Transducer};

prop_compose! {
    fn arbitrary_reading()(position in 0..3u8, car_at_gate in any::<bool>(), car_just_exited in any::<bool>()) -> GateReading {
        let position = match position {
            0 => GatePosition::Bottom,
            1 => GatePosition::Middle,
            _ => GatePosition::Top,
        };
        GateReading::new(position, car_at_gate, car_just_exited)
    }
}

fn arbitrary_token() -> impl Strategy<Value = Token> {
    prop_oneof![
        Just(Token::Absent),
        Just(Token::Cancel),
        prop::sample::select(vec![5u64, 10, 25, 50, 100, 200]).prop_map(|c| Token::Coin(Money::from_cents(c))),
        "[a-z]{1,6}".prop_map(Token::Unrecognized),
    ]
}

/// Runs the same inputs through a fresh driver twice.
fn transduce_twice<M, F>(make: F, inputs: Vec<M::Input>) -> (Vec<M::Output>, Vec<M::Output>)
where
    M: Transducer,
    M::Input: Clone,
    F: Fn() -> M,
{
    let mut machine = StateMachine::new(make());
    let first = machine.transduce(inputs.clone());
    let second = machine.transduce(inputs);
    (first, second)
}

proptest! {
    #[test]
    fn output_length_matches_input_length(
        numbers in prop::collection::vec(-1000i64..1000, 0..40),
        readings in prop::collection::vec(arbitrary_reading(), 0..40),
        tokens in prop::collection::vec(arbitrary_token(), 0..40),
    ) {
        prop_assert_eq!(StateMachine::new(Accumulator::new(0i64)).transduce(numbers.clone()).len(), numbers.len());
        prop_assert_eq!(StateMachine::new(Gain::new(3i64)).transduce(numbers.clone()).len(), numbers.len());
        prop_assert_eq!(StateMachine::new(Delay::new(0i64)).transduce(numbers.clone()).len(), numbers.len());
        let floats: Vec<f64> = numbers.iter().map(|n| *n as f64).collect();
        prop_assert_eq!(StateMachine::new(Average2::new()).transduce(floats).len(), numbers.len());
        prop_assert_eq!(StateMachine::new(SimpleParkingGate::new()).transduce(readings.clone()).len(), readings.len());
        prop_assert_eq!(StateMachine::new(VendingMachine::new()).transduce(tokens.clone()).len(), tokens.len());
    }

    #[test]
    fn empty_input_resets_to_start_state(numbers in prop::collection::vec(-1000i64..1000, 0..20)) {
        let mut machine = StateMachine::new(Accumulator::new(7i64));
        machine.transduce(numbers);

        let outputs = machine.transduce(Vec::new());

        prop_assert!(outputs.is_empty());
        prop_assert_eq!(machine.state(), Some(&7));
    }

    #[test]
    fn config_free_machines_are_deterministic(
        numbers in prop::collection::vec(-1000i64..1000, 0..30),
        directions in prop::collection::vec(prop::sample::select(vec!['u', 'd']), 0..30),
        readings in prop::collection::vec(arbitrary_reading(), 0..30),
    ) {
        let (a, b) = transduce_twice(|| Accumulator::new(0i64), numbers.clone());
        prop_assert_eq!(a, b);
        let (a, b) = transduce_twice(|| Gain::new(-4i64), numbers.clone());
        prop_assert_eq!(a, b);
        let (a, b) = transduce_twice(|| Delay::new(1i64), numbers.clone());
        prop_assert_eq!(a, b);
        let floats: Vec<f64> = numbers.iter().map(|n| *n as f64).collect();
        let (a, b) = transduce_twice(Average2::new, floats);
        prop_assert_eq!(a, b);
        let (a, b) = transduce_twice(UpDown::new, directions);
        prop_assert_eq!(a, b);
        let (a, b) = transduce_twice(SimpleParkingGate::new, readings);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn accumulator_emits_prefix_sums(
        initial in -1000i64..1000,
        numbers in prop::collection::vec(-1000i64..1000, 0..40),
    ) {
        let outputs = StateMachine::new(Accumulator::new(initial)).transduce(numbers.clone());

        let mut total = initial;
        for (output, input) in outputs.iter().zip(&numbers) {
            total += input;
            prop_assert_eq!(*output, total);
        }
    }

    #[test]
    fn final_state_matches_repeated_transitions(numbers in prop::collection::vec(-1000i64..1000, 0..40)) {
        let mut machine = StateMachine::new(Accumulator::new(0i64));
        machine.transduce(numbers.clone());

        let mut bare = Accumulator::new(0i64);
        let mut state = bare.start_state();
        for input in numbers {
            state = bare.next_values(&state, input).0;
        }

        prop_assert_eq!(machine.state(), Some(&state));
    }

    #[test]
    fn delay_shifts_inputs_by_one(
        initial in any::<i32>(),
        numbers in prop::collection::vec(any::<i32>(), 1..40),
    ) {
        let outputs = StateMachine::new(Delay::new(initial)).transduce(numbers.clone());

        prop_assert_eq!(outputs[0], initial);
        prop_assert_eq!(&outputs[1..], &numbers[..numbers.len() - 1]);
    }

    #[test]
    fn vending_balance_stays_below_price(tokens in prop::collection::vec(arbitrary_token(), 0..60)) {
        let mut machine = StateMachine::new(VendingMachine::new());
        let price = machine.machine().config().price;
        machine.start();

        for token in tokens {
            let before = machine.machine().balance();
            let rejected = machine.step(token).unwrap().is_rejected();
            let after = machine.machine().balance();

            prop_assert!(after < price);
            if rejected {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn run_emits_one_output_per_step(n in 0usize..50) {
        let mut machine = StateMachine::new(VendingMachine::new());

        prop_assert_eq!(machine.run(n).len(), n);
        prop_assert_eq!(machine.steps(), n);
    }
}
