/// Generate a router async method that selects capable providers and calls a
/// single-provider method. Not-found collapsing is handled by the orchestrator.
///
/// Notes on `not_found` label:
/// - Pass a noun only (e.g., "contributions", "presence").
/// - The orchestrator formats the final error as "{label} for {SUBJECT}".
/// - Do not include the word "for" in the label.
#[macro_export]
macro_rules! tessera_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $subject_ident:ident : &str ) -> $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:expr,
        not_found: $not_found:expr,
        call: $call_name:ident
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(
                target = "tessera::router",
                skip(self),
                fields(subject = %$subject_ident),
            )
        )]
        ///
        /// # Errors
        /// Returns an error if the subject is blank, no eligible provider succeeds,
        /// or none support the capability.
        pub async fn $name(&self, $subject_ident: &str) -> Result<$ret, tessera_core::TesseraError> {
            $crate::router::util::require_subject($subject_ident)?;
            self.fetch_single(
                $subject_ident,
                $capability,
                $not_found,
                move |c, subject| {
                    let c2 = c.clone();
                    if c2.$accessor().is_some() {
                        Some(async move {
                            if let Some(p) = c2.$accessor() {
                                p.$call_name(&subject).await
                            } else {
                                Err(tessera_core::TesseraError::connector(
                                    c2.name(),
                                    concat!("missing ", stringify!($name), " capability during call"),
                                ))
                            }
                        })
                    } else {
                        None
                    }
                },
            )
            .await
        }
    };
}
