//! Health State Machine
//!
//! This demo drives an entity's vitals with guarded transitions while its
//! health drains and recovers.
//!
//! Key concepts:
//! - Guards reading data shared with the owner (`Rc<Cell<_>>`)
//! - Several rules per state, first satisfied rule wins
//! - Entry observers reporting where the machine came from
//! - Entities kept in a generational object pool
//!
//! Run with: cargo run --example health_state
//! Set RUST_LOG=autonex=debug to see transitions and pool growth.

use autonex::{state_enum, ObjectPool, StateMachine};
use std::cell::Cell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Vitals {
        Alive,
        Injured,
        Dead,
        Immortal,
    }
}

struct Entity {
    health: Rc<Cell<i32>>,
    immortal: Rc<Cell<bool>>,
    vitals: StateMachine<Vitals>,
}

fn spawn(health: i32) -> Entity {
    let health = Rc::new(Cell::new(health));
    let immortal = Rc::new(Cell::new(false));
    let mut vitals = StateMachine::new(Vitals::Alive);

    let below = |limit: i32| {
        let h = Rc::clone(&health);
        move || h.get() < limit
    };
    let at_least = |limit: i32| {
        let h = Rc::clone(&health);
        move || h.get() >= limit
    };
    let is_immortal = || {
        let i = Rc::clone(&immortal);
        move || i.get()
    };
    let mortal_and = |check: Box<dyn Fn() -> bool>| {
        let i = Rc::clone(&immortal);
        move || !i.get() && check()
    };

    vitals.add_transition_rule(Vitals::Alive, Vitals::Injured, below(50));
    vitals.add_transition_rule(Vitals::Alive, Vitals::Immortal, is_immortal());

    vitals.add_transition_rule(Vitals::Injured, Vitals::Alive, at_least(50));
    vitals.add_transition_rule(Vitals::Injured, Vitals::Immortal, is_immortal());
    vitals.add_transition_rule(Vitals::Injured, Vitals::Dead, below(1));

    vitals.add_transition_rule(Vitals::Immortal, Vitals::Alive, mortal_and(Box::new(at_least(50))));
    vitals.add_transition_rule(Vitals::Immortal, Vitals::Injured, mortal_and(Box::new(below(50))));
    vitals.add_transition_rule(Vitals::Immortal, Vitals::Dead, mortal_and(Box::new(below(1))));

    for state in Vitals::ALL {
        vitals.bind_on_state_entry(*state, move |previous| {
            println!("  entered <{state}> from <{previous}>");
        });
    }

    Entity {
        health,
        immortal,
        vitals,
    }
}

fn run_phase(entity: &mut Entity, delta: i32, steps: usize, toggles: &[(usize, bool)]) {
    for i in 0..steps {
        entity.health.set(entity.health.get() + delta);
        println!("Current health: {}", entity.health.get());

        if let Some(&(_, on)) = toggles.iter().find(|(at, _)| *at == i) {
            println!("{} immortality", if on { "Activating" } else { "Deactivating" });
            entity.immortal.set(on);
        }

        entity.vitals.step();
        println!("Current state: <{}>\n", entity.vitals.current_state());
    }
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    println!("=== Health State Machine ===\n");

    let mut entities = ObjectPool::with_capacity(1);
    let hero = entities.create_with(|| spawn(100));

    let Some(entity) = entities.get_mut(hero) else {
        return;
    };
    println!("Starting with state: <{}>", entity.vitals.current_state());

    println!("Draining health by 10 per step");
    run_phase(entity, -10, 9, &[(2, true), (4, false)]);

    println!("Restoring health by 10 per step");
    run_phase(entity, 10, 10, &[(1, true), (2, false)]);

    entities.destroy(hero);
    println!("Hero handle {hero} still valid: {}", entities.validate(hero));

    println!("\n=== Demo Complete ===");
}
