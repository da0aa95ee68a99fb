pub mod common;

mod trigger_test {
    use padmac::GamepadButtons;
    use padmac::config::{MacroMode, MacroTrigger};
    use padmac::sequencer::SequencerState;

    use crate::common::{buttons, engine_with, frame, macro_slot, output_masks, run_trace};

    /// Two macros made eligible on the same tick: the lower slot index
    /// starts, the other is dropped for good (no queueing).
    #[test]
    fn test_lowest_slot_wins_and_loser_is_dropped() {
        let mut slot0 = macro_slot(
            MacroMode::Press,
            MacroTrigger::Button(GamepadButtons::A1),
            &[frame(buttons(0x1), 2, 0)],
        );
        // Non-interruptible, so the other held trigger can't cancel it.
        slot0.interruptible = false;
        let slot1 = macro_slot(
            MacroMode::Press,
            MacroTrigger::Button(GamepadButtons::A2),
            &[frame(buttons(0x2), 2, 0)],
        );
        let mut engine = engine_with(&[slot0, slot1]);

        // Both trigger buttons pressed on the same tick and held past
        // the winner's playback.
        let both = GamepadButtons::A1 | GamepadButtons::A2;
        let trace = [both, both, both, both, both, both];
        let outputs = run_trace(&mut engine, &trace);

        assert_eq!(
            output_masks(&outputs),
            vec![0x1, 0x1, both.into_bits(), both.into_bits(), both.into_bits(), both.into_bits()]
        );
        // Slot 1's mask never appears: no new edge occurred for it.
        assert!(outputs.iter().all(|o| o.buttons != buttons(0x2)));
    }

    /// An edge-triggered macro does not restart while its button stays
    /// held, and fires again after release and re-press.
    #[test]
    fn test_edge_trigger_requires_release() {
        let slot = macro_slot(
            MacroMode::Press,
            MacroTrigger::Button(GamepadButtons::A1),
            &[frame(buttons(0x1), 1, 0)],
        );
        let mut engine = engine_with(&[slot]);

        let a1 = GamepadButtons::A1;
        let none = GamepadButtons::NONE;
        let trace = [a1, a1, a1, a1, none, a1, none];
        let outputs = run_trace(&mut engine, &trace);

        assert_eq!(
            output_masks(&outputs),
            vec![
                0x1,            // started on the press edge
                a1.into_bits(), // done, pass-through
                a1.into_bits(), // idle again, still held: no new edge
                a1.into_bits(),
                0x0,            // released
                0x1,            // fresh edge starts it again
                0x0,
            ]
        );
    }

    /// A level-matched combo restarts as long as the combination stays
    /// held, with the one-tick `Done` settle between runs.
    #[test]
    fn test_combo_trigger_restarts_while_held() {
        let combo = GamepadButtons::DPAD_DOWN | GamepadButtons::B1;
        let slot = macro_slot(
            MacroMode::Press,
            MacroTrigger::Combo(combo),
            &[frame(buttons(0x80000), 1, 0)],
        );
        let mut engine = engine_with(&[slot]);

        let trace = [combo, combo, combo, combo, combo];
        let outputs = run_trace(&mut engine, &trace);

        // Frame tick, settle tick, frame tick, settle tick, ...
        assert_eq!(
            output_masks(&outputs),
            vec![0x80000, combo.into_bits(), 0x80000, combo.into_bits(), 0x80000]
        );
    }

    /// While any macro is playing, no other trigger is evaluated.
    #[test]
    fn test_no_start_while_playing() {
        // Slot 0 non-interruptible and non-exclusive: the A2 press must
        // be rejected by the single-run-state policy alone.
        let mut slot0 = macro_slot(
            MacroMode::Press,
            MacroTrigger::Button(GamepadButtons::A1),
            &[frame(buttons(0x1), 3, 0)],
        );
        slot0.interruptible = false;
        slot0.exclusive = false;
        let slot1 = macro_slot(
            MacroMode::Press,
            MacroTrigger::Button(GamepadButtons::A2),
            &[frame(buttons(0x2), 1, 0)],
        );
        let mut engine = engine_with(&[slot0, slot1]);

        let a1 = GamepadButtons::A1;
        let a2 = GamepadButtons::A2;
        let none = GamepadButtons::NONE;
        // A2 edge lands mid-playback of slot 0; it is rejected, not
        // queued.
        let trace = [a1, a2, none, none, none];
        let outputs = run_trace(&mut engine, &trace);
        assert_eq!(output_masks(&outputs), vec![0x1, 0x1, 0x1, 0x0, 0x0]);
        assert_eq!(engine.state(), SequencerState::Idle);
    }
}
