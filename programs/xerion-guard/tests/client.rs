#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;
    use xerion_guard::types::{Cluster, Commitment, StaticRegistry};
    use xerion_guard::{
        AdmissionPolicy, DerivedAddress, PricePoint, XerionClient, XerionClientConfig,
        XerionError, XerionErrorCode,
    };

    const VAULT: &str = "vault";
    const SOL_USD: &str = "SOL/USD";

    struct Fixture {
        wallet: Pubkey,
        vault_program: Pubkey,
        sol_feed: Pubkey,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                wallet: Pubkey::new_unique(),
                vault_program: Pubkey::new_unique(),
                sol_feed: Pubkey::new_unique(),
            }
        }

        fn config(&self, cluster: &str, commitment: &str) -> XerionClientConfig {
            XerionClientConfig {
                wallet: Box::new(self.wallet),
                cluster: cluster.to_string(),
                commitment: commitment.to_string(),
                program_registry: Box::new(StaticRegistry::new().with(VAULT, self.vault_program)),
                oracle_registry: Box::new(StaticRegistry::new().with(SOL_USD, self.sol_feed)),
            }
        }

        fn client(&self) -> XerionClient {
            XerionClient::new(self.config("devnet", "confirmed")).unwrap()
        }
    }

    fn config_message(result: std::result::Result<XerionClient, XerionError>) -> String {
        match result {
            Err(XerionError::Config { message, .. }) => message,
            Err(other) => panic!("expected config error, got {other:?}"),
            Ok(_) => panic!("expected config error, got a client"),
        }
    }

    #[test]
    fn test_builds_with_valid_config() {
        let fx = Fixture::new();
        let client = fx.client();
        assert_eq!(client.wallet(), fx.wallet);
        assert_eq!(client.cluster(), Cluster::Devnet);
        assert_eq!(client.commitment(), Commitment::Confirmed);
    }

    #[test]
    fn test_rejects_default_wallet() {
        let fx = Fixture::new();
        let mut config = fx.config("devnet", "confirmed");
        config.wallet = Box::new(Pubkey::default());
        assert_eq!(
            config_message(XerionClient::new(config)),
            "wallet pubkey must be a valid public key"
        );
    }

    #[test]
    fn test_rejects_empty_cluster_and_commitment() {
        let fx = Fixture::new();
        assert_eq!(
            config_message(XerionClient::new(fx.config("", "confirmed"))),
            "cluster must be a non-empty string"
        );
        assert_eq!(
            config_message(XerionClient::new(fx.config("devnet", ""))),
            "commitment must be a non-empty string"
        );
    }

    #[test]
    fn test_rejects_unknown_cluster() {
        let fx = Fixture::new();
        let err = XerionClient::new(fx.config("moonnet", "confirmed")).err().unwrap();
        assert!(matches!(err.code(), XerionErrorCode::ConfigError));
        assert_eq!(err.context()["cluster"], "moonnet");
    }

    #[test]
    fn test_registry_lookups() {
        let fx = Fixture::new();
        let client = fx.client();
        assert_eq!(client.program_id(VAULT).unwrap(), fx.vault_program);
        assert_eq!(client.feed_address(SOL_USD).unwrap(), fx.sol_feed);

        let err = client.program_id("missing").unwrap_err();
        assert_eq!(err.context()["role"], "missing");
        assert!(client.feed_address(VAULT).is_err());
    }

    #[test]
    fn test_admit_price_forwards_verdict() {
        let client = Fixture::new().client();
        let policy = AdmissionPolicy {
            max_staleness_slots: 10,
            max_confidence_bps: 100,
        };
        let fresh = PricePoint {
            price: 10_000,
            confidence: 10,
            publish_slot: 195,
        };
        assert!(client.admit_price(200, &fresh, &policy).is_ok());

        let stale = PricePoint {
            publish_slot: 1,
            ..fresh
        };
        assert!(matches!(
            client.admit_price(200, &stale, &policy),
            Err(XerionError::Stale { .. })
        ));
    }

    #[test]
    fn test_derive_and_verify_pda_through_registry() {
        let fx = Fixture::new();
        let client = fx.client();
        let seeds: [&[u8]; 2] = [b"vault", fx.wallet.as_ref()];

        let pda = client.derive_pda(VAULT, &seeds).unwrap();
        let (expected, bump) = Pubkey::find_program_address(&seeds, &fx.vault_program);
        assert_eq!((pda.address(), pda.bump()), (expected, bump));

        let verified = client.verify_pda(VAULT, &seeds, &pda.into()).unwrap();
        assert_eq!(verified, pda);

        let forged = DerivedAddress {
            address: Pubkey::new_unique(),
            bump: pda.bump(),
        };
        assert!(matches!(
            client.verify_pda(VAULT, &seeds, &forged),
            Err(XerionError::PdaMismatch { .. })
        ));
        assert!(client.derive_pda("missing", &seeds).is_err());
    }

    #[test]
    fn test_account_ownership() {
        let fx = Fixture::new();
        let client = fx.client();
        let account = Pubkey::new_unique();
        assert!(client
            .check_account_owner(&account, &fx.vault_program, VAULT)
            .is_ok());

        let intruder = Pubkey::new_unique();
        let err = client
            .check_account_owner(&account, &intruder, VAULT)
            .unwrap_err();
        assert_eq!(
            err,
            XerionError::AccountOwnership {
                account,
                expected_owner: fx.vault_program,
                actual_owner: intruder,
            }
        );
        assert!(matches!(err.code(), XerionErrorCode::AccountOwnership));
    }

    #[test]
    fn test_cluster_and_commitment_parse() {
        assert_eq!("mainnet-beta".parse::<Cluster>().unwrap(), Cluster::MainnetBeta);
        assert_eq!("localhost".parse::<Cluster>().unwrap(), Cluster::Localnet);
        assert_eq!(Cluster::Testnet.to_string(), "testnet");
        assert_eq!("finalized".parse::<Commitment>().unwrap(), Commitment::Finalized);
        assert!("recent".parse::<Commitment>().is_err());
    }
}
