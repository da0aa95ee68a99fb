pub mod common;

mod runner_test {
    use core::convert::Infallible;

    use embassy_futures::block_on;
    use embassy_futures::select::{Either, select};
    use embassy_futures::yield_now;
    use embassy_time::MockDriver;
    use heapless::{String, Vec};
    use padmac::GamepadButtons;
    use padmac::channel::CONFIG_UPDATE;
    use padmac::engine::{MacroEngine, TickOutput};
    use padmac::indicator::BoardLed;
    use padmac::macro_options::{MACRO_TYPE_PRESS, MacroEntry, MacroInput, MacroOptions};
    use padmac::runner::{InputSource, OutputSink, TICK_PERIOD, macro_task};

    struct NoopPin;

    impl embedded_hal::digital::ErrorType for NoopPin {
        type Error = Infallible;
    }
    impl embedded_hal::digital::OutputPin for NoopPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    struct ScriptedInput {
        presses: std::vec::Vec<GamepadButtons>,
        idx: usize,
    }

    impl InputSource for ScriptedInput {
        fn snapshot(&mut self) -> GamepadButtons {
            let live = self.presses.get(self.idx).copied().unwrap_or(GamepadButtons::NONE);
            self.idx += 1;
            live
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        outputs: std::vec::Vec<TickOutput>,
    }

    impl OutputSink for RecordingSink {
        fn write(&mut self, output: TickOutput) {
            self.outputs.push(output);
        }
    }

    fn options_with_mask(mask: u32) -> MacroOptions {
        let mut entry = MacroEntry {
            enabled: 1,
            exclusive: 1,
            interruptible: 1,
            show_frames: 1,
            macro_type: MACRO_TYPE_PRESS,
            use_macro_trigger_button: 1,
            macro_trigger_button: GamepadButtons::A1.into_bits(),
            macro_label: String::new(),
            macro_inputs: Vec::new(),
        };
        entry
            .macro_inputs
            .push(MacroInput {
                button_mask: mask,
                // Two poll periods per frame.
                duration: 2 * TICK_PERIOD.as_micros() as i64,
                wait_duration: 0,
            })
            .unwrap();

        let mut options = MacroOptions {
            board_led_enabled: 1,
            macro_list: Vec::new(),
        };
        options.macro_list.push(entry).unwrap();
        options
    }

    /// One test only: the mock time driver is process-global.
    #[test]
    fn test_runner_ticks_engine_and_applies_config_updates() {
        const TICKS: usize = 5;

        let mut engine = MacroEngine::from_options(&options_with_mask(0x1)).unwrap();
        let mut input = ScriptedInput {
            presses: vec![
                GamepadButtons::A1,
                GamepadButtons::A1,
                GamepadButtons::NONE,
                GamepadButtons::NONE,
                GamepadButtons::NONE,
            ],
            idx: 0,
        };
        let mut sink = RecordingSink::default();
        let mut led = BoardLed::<NoopPin>::disabled();

        // Queued before the loop starts: the runner must swap the bank
        // in before evaluating the first tick.
        CONFIG_UPDATE.signal(options_with_mask(0x2));

        let result = block_on(select(
            macro_task(&mut engine, &mut input, &mut sink, &mut led),
            async {
                for _ in 0..TICKS {
                    MockDriver::get().advance(TICK_PERIOD);
                    for _ in 0..4 {
                        yield_now().await;
                    }
                }
            },
        ));
        assert!(matches!(result, Either::Second(())));

        let masks: std::vec::Vec<u32> = sink.outputs.iter().map(|o| o.buttons.into_bits()).collect();
        // The replacement config's mask plays, not the original 0x1.
        assert_eq!(
            masks,
            vec![
                0x2, // started on the A1 edge
                0x2, // second poll period of the frame
                GamepadButtons::NONE.into_bits(), // done
                0x0, // idle
                0x0,
            ]
        );
        assert!(sink.outputs[0].led && sink.outputs[1].led);
        assert!(!sink.outputs[2].led);
    }
}
