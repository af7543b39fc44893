use tessera::{Capability, Tessera, TesseraError};

use crate::helpers::{MockConnector, OCTOCAT, dyn_conn, entry, m_contrib};

#[tokio::test]
async fn registration_order_is_default_priority() {
    let first = m_contrib("first", vec![entry("2024-06-10", 1, 1)]);
    let second = m_contrib("second", vec![entry("2024-06-10", 9, 4)]);

    let tessera = Tessera::builder()
        .with_connector(first.clone())
        .with_connector(second.clone())
        .build()
        .unwrap();

    let out = tessera.contributions(OCTOCAT).await.unwrap();
    assert_eq!(out[0].count, 1);
    assert_eq!(second.call_count(), 0);
}

#[tokio::test]
async fn per_capability_priority_is_applied() {
    let low = m_contrib("low", vec![entry("2024-06-10", 1, 1)]);
    let high = m_contrib("high", vec![entry("2024-06-10", 9, 4)]);

    let tessera = Tessera::builder()
        .with_connector(low.clone())
        .with_connector(high.clone())
        .prefer_for(Capability::Contributions, &[dyn_conn(&high), dyn_conn(&low)])
        .build()
        .unwrap();

    let out = tessera.contributions(OCTOCAT).await.unwrap();
    assert_eq!(out[0].count, 9);
    assert_eq!(low.call_count(), 0);
}

#[tokio::test]
async fn priority_for_one_capability_leaves_others_alone() {
    let a = MockConnector::builder()
        .name("a")
        .contributions(vec![entry("2024-06-10", 1, 1)])
        .events(crate::helpers::events_on("2024-06-10", 1))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .contributions(vec![entry("2024-06-10", 2, 1)])
        .events(crate::helpers::events_on("2024-06-10", 5))
        .build();

    let tessera = Tessera::builder()
        .with_connector(a.clone())
        .with_connector(b.clone())
        .prefer_for(Capability::Contributions, &[dyn_conn(&b)])
        .build()
        .unwrap();

    assert_eq!(tessera.contributions(OCTOCAT).await.unwrap()[0].count, 2);
    assert_eq!(tessera.events(OCTOCAT).await.unwrap().len(), 1);
}

#[tokio::test]
async fn falls_back_to_next_provider_on_error() {
    let broken = MockConnector::builder()
        .name("broken")
        .contributions_fn(|_| Err(TesseraError::Other("boom".into())))
        .build();
    let healthy = m_contrib("healthy", vec![entry("2024-06-10", 3, 2)]);

    let tessera = Tessera::builder()
        .with_connector(broken.clone())
        .with_connector(healthy.clone())
        .build()
        .unwrap();

    let out = tessera.contributions(OCTOCAT).await.unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(broken.call_count(), 1);
    assert_eq!(healthy.call_count(), 1);
}

#[tokio::test]
async fn all_failures_are_aggregated_and_tagged() {
    let a = MockConnector::builder()
        .name("a")
        .contributions_fn(|_| Err(TesseraError::Other("a down".into())))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .contributions_fn(|_| Err(TesseraError::Data("bad json".into())))
        .build();

    let tessera = Tessera::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    match tessera.contributions(OCTOCAT).await.unwrap_err() {
        TesseraError::AllProvidersFailed(errs) => {
            assert_eq!(errs.len(), 2);
            assert!(matches!(&errs[0], TesseraError::Connector { connector, .. } if connector == "a"));
            assert!(matches!(&errs[1], TesseraError::Connector { connector, .. } if connector == "b"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn unknown_priority_keys_are_ignored() {
    let only = m_contrib("only", vec![entry("2024-06-10", 1, 1)]);
    let stranger = m_contrib("stranger", vec![]);

    let tessera = Tessera::builder()
        .with_connector(only.clone())
        .prefer_for(Capability::Contributions, &[dyn_conn(&stranger), dyn_conn(&only)])
        .build()
        .unwrap();

    assert_eq!(tessera.contributions(OCTOCAT).await.unwrap().len(), 1);
    assert_eq!(stranger.call_count(), 0);
}

#[test]
fn builder_requires_a_connector() {
    assert!(matches!(
        Tessera::builder().build(),
        Err(TesseraError::InvalidArg(_))
    ));
}
