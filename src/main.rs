use parley::{DeliveryState, ParleyError, Space, SpaceConfig};

fn main() -> Result<(), ParleyError> {
    parley::logging::init();

    let config = SpaceConfig::builder()
        .room("general")
        .room("random")
        .motd("Welcome to parley.")
        .build();

    if let Some(motd) = &config.motd {
        println!("{motd}");
    }

    let mut space = Space::new(config);
    let general = space
        .find_room("general")
        .ok_or_else(|| ParleyError::UnknownRoom("general".into()))?;

    let alice = space.add_participant("Alice");
    let bob = space.add_participant("Bob");
    let carol = space.add_participant("Carol");

    space.join_room(alice, general);
    space.join_room(bob, general);
    space.join_room(carol, general);

    space.send(alice, "hi everyone", general);

    // Bob steps away, Carol defers her messages.
    space.change_state(bob, DeliveryState::Unavailable);
    space.change_state(carol, DeliveryState::Deferred);
    space.send(alice, "anyone around?", general);

    space.change_state(bob, DeliveryState::Available);
    space.change_state(carol, DeliveryState::Available);

    // Only an elevated participant may open a room.
    if let Err(e) = space.create_room_by(bob, "annex") {
        println!("Room creation refused: {e}");
    }
    space.promote(bob);
    let annex = space.create_room_by(bob, "annex")?;
    space.join_room(bob, annex);
    space.join_room(alice, annex);
    space.send(bob, "moved over here", annex);

    // Replay what general has seen.
    println!("-- general history --");
    let mut cursor = space.create_iterator(general);
    while cursor.has_next(&space) {
        println!("- {}", cursor.next(&space));
    }

    cursor.reset();
    println!("replay from the top: {}", cursor.next(&space));

    Ok(())
}
