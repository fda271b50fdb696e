use intcode_vm::{
    alarm,
    amp::{amp_chain, amp_loop, max_signal},
    arcade::{self, Screen, TileId, Tilt},
    int_code::read_int_code,
    paint::{sim_paint, Color},
    Error,
};

fn fixture(name: &str) -> Vec<i64> {
    read_int_code(format!("tests/data/{}.txt", name)).unwrap()
}

#[test]
fn patched_program_result() {
    let program = fixture("alarm");
    assert_eq!(alarm::patch_and_run(&program, 5, 6).unwrap(), 19690720);
    assert_eq!(alarm::patch_and_run(&program, 12, 2).unwrap(), 2);
    assert_eq!(alarm::find_noun_verb(&program, 19690720), Some(506));
    assert_eq!(alarm::find_noun_verb(&program, -1), None);
}

#[test]
fn amplifiers_in_series() {
    let program = fixture("amp_chain");
    assert_eq!(amp_chain(&program, &[4, 3, 2, 1, 0]).unwrap(), 43210);
    assert_eq!(
        max_signal(&program, &[0, 1, 2, 3, 4], amp_chain).unwrap(),
        43210
    );

    let program = [
        3, 23, 3, 24, 1002, 24, 10, 24, 1002, 23, -1, 23, 101, 5, 23, 23, 1, 24, 23, 23, 4, 23,
        99, 0, 0,
    ];
    assert_eq!(
        max_signal(&program, &[0, 1, 2, 3, 4], amp_chain).unwrap(),
        54321
    );
}

#[test]
fn amplifiers_in_feedback_loop() {
    let program = fixture("amp_loop");
    assert_eq!(amp_loop(&program, &[9, 8, 7, 6, 5]).unwrap(), 139629729);
    assert_eq!(
        max_signal(&program, &[5, 6, 7, 8, 9], amp_loop).unwrap(),
        139629729
    );
}

#[test]
fn amplifier_without_output_is_reported() {
    // Reads phase and one signal, then waits forever
    let program = [3, 10, 3, 10, 3, 10, 99];
    assert!(matches!(
        amp_loop(&program, &[5, 6]),
        Err(Error::AmplifierStuck(0))
    ));

    let program = [3, 10, 3, 10, 99];
    assert!(matches!(
        amp_chain(&program, &[0, 1]),
        Err(Error::EmptyAmplifierOutput(_))
    ));
}

#[test]
fn amplifier_running_off_memory_in_phase_setting_is_reported() {
    assert!(matches!(
        amp_loop(&[3, 1], &[5, 6]),
        Err(Error::UnexpectedOutOfBounds)
    ));
}

#[test]
fn robot_paints_with_camera_input() {
    let program = fixture("paint");
    let robot = sim_paint(&program, Color::Black).unwrap();
    assert_eq!(robot.paint_count(), 2);
    assert_eq!(robot.block_count(), 2);
    assert_eq!(robot.render(), "#.\n");

    let robot = sim_paint(&program, Color::White).unwrap();
    assert_eq!(robot.render(), "##\n");
}

#[test]
fn robot_turns_both_ways() {
    // right, left, left, left, left
    let program = [
        104, 1, 104, 1, 104, 1, 104, 0, 104, 1, 104, 0, 104, 0, 104, 0, 104, 0, 104, 0, 99,
    ];
    let robot = sim_paint(&program, Color::Black).unwrap();
    assert_eq!(robot.paint_count(), 5);
    assert_eq!(robot.block_count(), 4);
    assert_eq!(robot.render(), ".#\n.#\n");
}

#[test]
fn robot_rejects_invalid_commands() {
    assert!(matches!(
        sim_paint(&[104, 2, 104, 0, 99], Color::Black),
        Err(Error::InvalidPaintColor(2))
    ));
    assert!(matches!(
        sim_paint(&[104, 1, 104, 5, 99], Color::Black),
        Err(Error::InvalidTurnDirection(5))
    ));
    assert!(matches!(
        sim_paint(&[104, 1, 99], Color::Black),
        Err(Error::InvalidPaintCommand(cmd)) if cmd == vec![1]
    ));
}

#[test]
fn arcade_counts_blocks_and_plays() {
    let program = fixture("arcade");
    assert_eq!(arcade::count_blocks(&program).unwrap(), 1);
    // Paddle is left to the ball, the game echoes joystick as score
    assert_eq!(arcade::play(&program).unwrap(), 1);
}

#[test]
fn screen_follows_game_output() {
    let mut screen = Screen::default();
    screen
        .update(&[0, 0, 1, 1, 0, 2, 2, 0, 2, 3, 1, 4, 1, 2, 3, -1, 0, 77])
        .unwrap();
    assert_eq!(screen.count_id(TileId::Block), 2);
    assert_eq!(screen.score(), 77);
    assert_eq!(screen.joystick(), Tilt::Right);
    assert_eq!(screen.render(), "#== \n   o\n -  \nScore | 77");

    screen.update(&[3, 1, 0, 0, 1, 4]).unwrap();
    assert_eq!(screen.joystick(), Tilt::Left);
    screen.update(&[0, 1, 0, 1, 1, 4]).unwrap();
    assert_eq!(screen.joystick(), Tilt::Neutral);

    assert!(matches!(
        screen.update(&[1, 1, 9]),
        Err(Error::InvalidTileId(9))
    ));
    assert!(matches!(
        screen.update(&[1, 1, 0, 5]),
        Err(Error::IncompleteTile(1))
    ));
}
