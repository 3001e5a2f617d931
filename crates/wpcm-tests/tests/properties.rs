//! Property tests over manager options, render intents and transform lifetimes

use proptest::prelude::*;
use wpcm_core::{ColorTransform, NamedPrimaries, RenderIntent, TransferFunction};
use wpcm_server::protocol::SurfaceRequest;
use wpcm_server::{Display, Error, Event, ManagerOptions, ProtocolError};
use wpcm_tests::{Harness, MANAGER};

fn intent_subset() -> impl Strategy<Value = Vec<RenderIntent>> {
    proptest::sample::subsequence(RenderIntent::ALL.to_vec(), 0..=RenderIntent::ALL.len())
}

fn tf_subset() -> impl Strategy<Value = Vec<TransferFunction>> {
    proptest::sample::subsequence(
        vec![
            TransferFunction::Srgb,
            TransferFunction::St2084Pq,
            TransferFunction::Hlg,
            TransferFunction::Gamma22,
            TransferFunction::ExtLinear,
        ],
        0..=5,
    )
}

fn primaries_subset() -> impl Strategy<Value = Vec<NamedPrimaries>> {
    proptest::sample::subsequence(
        vec![
            NamedPrimaries::Srgb,
            NamedPrimaries::Bt2020,
            NamedPrimaries::DisplayP3,
            NamedPrimaries::AdobeRgb,
        ],
        0..=4,
    )
}

proptest! {
    #[test]
    fn prop_construction_requires_perceptual(intents in intent_subset()) {
        let options = ManagerOptions {
            render_intents: intents.clone(),
            ..ManagerOptions::default()
        };
        let result = Display::new(&options);
        if intents.contains(&RenderIntent::Perceptual) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(matches!(result, Err(Error::MissingPerceptualIntent)));
        }
    }

    #[test]
    fn prop_bind_burst_matches_options(
        mut intents in intent_subset(),
        tfs in tf_subset(),
        primaries in primaries_subset(),
    ) {
        if !intents.contains(&RenderIntent::Perceptual) {
            intents.push(RenderIntent::Perceptual);
        }
        let options = ManagerOptions {
            render_intents: intents.clone(),
            transfer_functions: tfs.clone(),
            primaries: primaries.clone(),
            ..ManagerOptions::default()
        };
        let mut h = Harness::with_options(&options).unwrap();
        h.display.bind_color_manager(h.client, MANAGER, 1).unwrap();
        let events = h.take_event_kinds().unwrap();

        let expected: Vec<Event> = intents
            .iter()
            .map(|&i| Event::SupportedIntent(i))
            .chain(tfs.iter().map(|&tf| Event::SupportedTfNamed(tf)))
            .chain(primaries.iter().map(|&p| Event::SupportedPrimariesNamed(p)))
            .chain(std::iter::once(Event::Done))
            .collect();
        prop_assert_eq!(&events, &expected);
        prop_assert_eq!(events.iter().filter(|e| **e == Event::Done).count(), 1);
    }

    #[test]
    fn prop_render_intent_validation(
        intents in intent_subset(),
        wire in prop_oneof![0u32..8, any::<u32>()],
    ) {
        let mut intents = intents;
        if !intents.contains(&RenderIntent::Perceptual) {
            intents.push(RenderIntent::Perceptual);
        }
        let options = ManagerOptions {
            render_intents: intents.clone(),
            ..ManagerOptions::default()
        };
        let mut h = Harness::with_options(&options).unwrap();
        h.bind().unwrap();
        let surface = h.display.host_mut().create_surface();
        let ext = h.get_surface(surface).unwrap();
        let output = h.display.host_mut().create_output("DP-1");
        let output_ext = h.get_output(output).unwrap();
        let description = h.output_description(output_ext).unwrap();

        let result = h.display.dispatch(
            h.client,
            ext,
            SurfaceRequest::SetImageDescription {
                image_description: description,
                render_intent: wire,
            },
        );

        let supported = RenderIntent::from_wire(wire).is_some_and(|i| intents.contains(&i));
        if supported {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(ProtocolError::RenderIntent(wire)));
        }
    }

    #[test]
    fn prop_refs_balance(extra in 0usize..16) {
        let transform = ColorTransform::init_srgb(NamedPrimaries::Srgb).unwrap();
        let refs: Vec<_> = (0..extra).map(|_| transform.clone()).collect();
        prop_assert_eq!(transform.ref_count(), extra + 1);

        for (released, r) in refs.into_iter().enumerate() {
            r.unref();
            prop_assert_eq!(transform.ref_count(), extra - released);
        }
    }
}
