//! Output extension lifetimes against host output destruction

use wpcm_server::protocol::OutputRequest;
use wpcm_server::{Entity, Event, ProtocolError, ResourceData, ResourceId};
use wpcm_tests::Harness;

#[test]
fn test_get_output_links_and_subscribes() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.bind()?;
    let output = h.display.host_mut().create_output("DP-1");

    let ext = h.get_output(output)?;

    let rid = ResourceId::new(h.client, ext);
    assert_eq!(h.display.manager().outputs().collect::<Vec<_>>(), [rid]);
    assert_eq!(h.display.host().listener_count(Entity::Output(output)), 1);
    match h.client()?.resource(ext).map(|r| &r.data) {
        Some(ResourceData::Output(Some(extension))) => assert_eq!(extension.output(), output),
        other => panic!("expected live output extension, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_host_destroy_makes_extension_inert() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.bind()?;
    let output = h.display.host_mut().create_output("HDMI-A-1");
    let ext = h.get_output(output)?;

    assert!(h.display.destroy_output(output));

    assert!(!h.display.host().has_output(output));
    assert_eq!(h.display.manager().outputs().count(), 0);
    let resource = h.client()?.resource(ext);
    assert!(resource.is_some_and(|r| r.data.is_inert()));

    // Second destroy of the host output is a no-op
    assert!(!h.display.destroy_output(output));
    Ok(())
}

#[test]
fn test_inert_output_still_resolves_descriptions() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.bind()?;
    let output = h.display.host_mut().create_output("eDP-1");
    let ext = h.get_output(output)?;
    h.display.destroy_output(output);

    let description = h.output_description(ext)?;

    let messages = h.take_events()?;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].object, description);
    assert_eq!(messages[0].event, Event::Ready { identity: 0 });
    Ok(())
}

#[test]
fn test_client_release_unsubscribes() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.bind()?;
    let output = h.display.host_mut().create_output("DP-2");
    let ext = h.get_output(output)?;

    h.display.dispatch(h.client, ext, OutputRequest::Destroy)?;

    assert!(h.client()?.resource(ext).is_none());
    assert_eq!(h.display.host().listener_count(Entity::Output(output)), 0);
    assert_eq!(h.display.manager().outputs().count(), 0);

    // Output teardown afterwards finds nobody to notify
    assert!(h.display.destroy_output(output));
    Ok(())
}

#[test]
fn test_release_after_inert() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.bind()?;
    let output = h.display.host_mut().create_output("DP-3");
    let ext = h.get_output(output)?;
    h.display.destroy_output(output);

    h.display.dispatch(h.client, ext, OutputRequest::Destroy)?;

    assert!(h.client()?.resource(ext).is_none());
    assert!(h.client()?.posted_error().is_none());
    Ok(())
}

#[test]
fn test_every_binding_on_an_output_goes_inert() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.bind()?;
    let other = h.display.create_client();
    h.display
        .bind_color_manager(other, wpcm_tests::MANAGER, 1)?;
    let output = h.display.host_mut().create_output("DP-4");

    let first = h.get_output(output)?;
    let second = h.get_output(output)?;
    h.display.dispatch(
        other,
        wpcm_tests::MANAGER,
        wpcm_server::protocol::ManagerRequest::GetOutput {
            id: first,
            output,
        },
    )?;
    assert_eq!(h.display.manager().outputs().count(), 3);

    h.display.destroy_output(output);

    assert_eq!(h.display.manager().outputs().count(), 0);
    for (client, object) in [(h.client, first), (h.client, second), (other, first)] {
        let resource = h.display.client(client).and_then(|c| c.resource(object));
        assert!(resource.is_some_and(|r| r.data.is_inert()), "{client:?} {object}");
    }
    Ok(())
}

#[test]
fn test_unknown_output() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.bind()?;
    let output = h.display.host_mut().create_output("gone");
    h.display.destroy_output(output);

    assert_eq!(h.get_output(output), Err(ProtocolError::UnknownOutput(output)));
    Ok(())
}

#[test]
fn test_no_memory_leaves_no_state() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.bind()?;
    let output = h.display.host_mut().create_output("DP-5");
    let client = h.client;
    if let Some(c) = h.display.client_mut(client) {
        c.set_resource_limit(Some(1));
    }

    assert_eq!(h.get_output(output), Err(ProtocolError::NoMemory));

    assert_eq!(h.display.manager().outputs().count(), 0);
    assert_eq!(h.display.host().listener_count(Entity::Output(output)), 0);
    let posted = h.client()?.posted_error().cloned().unwrap();
    assert_eq!(posted.code, 2);
    assert_eq!(posted.message, "insufficient memory");
    Ok(())
}
