use hecs::World;

use crate::{Config, InputQueue, Paddle};

/// Apply the latest reported paddle positions
pub fn ingest_inputs(world: &mut World, input: &mut InputQueue, config: &Config) {
    for (side, z) in input.pop_inputs() {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.z = config.clamp_paddle_z(z);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Side};

    #[test]
    fn test_ingest_moves_matching_paddle() {
        let mut world = World::new();
        let config = Config::new();
        let left = create_paddle(&mut world, Side::Left, 1.25, &config);
        let right = create_paddle(&mut world, Side::Right, 1.25, &config);
        let mut queue = InputQueue::new();
        queue.push_input(Side::Left, 0.9);

        ingest_inputs(&mut world, &mut queue, &config);

        assert_eq!(world.get::<&Paddle>(left).unwrap().z, 0.9);
        assert_eq!(world.get::<&Paddle>(right).unwrap().z, 1.25);
        assert!(queue.inputs.is_empty(), "Queue should be drained");
    }

    #[test]
    fn test_ingest_clamps_out_of_range_positions() {
        let mut world = World::new();
        let config = Config::new();
        let right = create_paddle(&mut world, Side::Right, 1.25, &config);
        let mut queue = InputQueue::new();
        queue.push_input(Side::Right, 5.0);

        ingest_inputs(&mut world, &mut queue, &config);

        assert_eq!(world.get::<&Paddle>(right).unwrap().z, config.paddle_max_z);
    }

    #[test]
    fn test_last_input_wins() {
        let mut world = World::new();
        let config = Config::new();
        let left = create_paddle(&mut world, Side::Left, 1.25, &config);
        let mut queue = InputQueue::new();
        queue.push_input(Side::Left, 0.7);
        queue.push_input(Side::Left, 1.5);

        ingest_inputs(&mut world, &mut queue, &config);

        assert_eq!(world.get::<&Paddle>(left).unwrap().z, 1.5);
    }
}
