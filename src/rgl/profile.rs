use tracing::{debug, instrument};

use crate::error::{Result, RglError};
use crate::model::{Player, PlayerTeamHistory};
use crate::rgl::{self, Transport};

/// Every steam64 id the API knows about starts with this.
pub(crate) const STEAM_ID_PREFIX: &str = "76561";

/// A steam id must be all ASCII digits and start with [`STEAM_ID_PREFIX`].
/// Length is left to the API.
pub(crate) fn validate_steam_id(steam_id: &str) -> Result<()> {
    if steam_id.starts_with(STEAM_ID_PREFIX) && steam_id.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(RglError::InvalidSteamId {
            id: steam_id.to_owned(),
            prefix: STEAM_ID_PREFIX,
        })
    }
}

#[instrument(skip(transport))]
pub(crate) async fn get_player(transport: &Transport, steam_id: &str) -> Result<Player> {
    validate_steam_id(steam_id)?;
    rgl::get_or_default(transport, &["profile", steam_id]).await
}

#[instrument(skip(transport))]
pub(crate) async fn get_player_team_history(
    transport: &Transport,
    steam_id: &str,
) -> Result<Vec<PlayerTeamHistory>> {
    let history: Vec<PlayerTeamHistory> =
        rgl::get_or_default(transport, &["profile", steam_id, "teams"]).await?;
    debug!(count = history.len(), "parsed team history");
    Ok(history)
}

/// Look up many profiles at once. Unknown or malformed ids are left out of
/// the result rather than reported.
#[instrument(skip(transport, steam_ids), fields(requested = steam_ids.len()))]
pub(crate) async fn bulk_players<S>(transport: &Transport, steam_ids: &[S]) -> Result<Vec<Player>>
where
    S: AsRef<str>,
{
    let body: Vec<&str> = steam_ids.iter().map(AsRef::as_ref).collect();
    let players: Vec<Player> =
        rgl::post_or_default(transport, &["profile", "getmany"], &[], &body).await?;
    debug!(count = players.len(), "parsed bulk players");
    Ok(players)
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::model::Format;
    use crate::rgl::envelope::RemoteErrorKind;
    use crate::rgl::test_support::transport;

    fn player_json(steam_id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "steamId": steam_id,
            "avatar": "https://avatars.steamstatic.com/a.jpg",
            "name": name,
            "updatedAt": "2023-02-12T21:48:27.196Z",
            "status": { "isVerified": false, "isBanned": false, "isOnProbation": false },
            "banInformation": null,
            "currentTeams": {
                "sixes": null,
                "highlander": {
                    "id": 12001,
                    "tag": "HL",
                    "name": "highlanders",
                    "status": "Ready",
                    "seasonId": 140,
                    "divisionId": 900,
                    "divisionName": "Main"
                },
                "prolander": null
            }
        })
    }

    #[test]
    fn test_validate_steam_id() {
        assert!(validate_steam_id("76561198098770013").is_ok());
        assert!(validate_steam_id("7656111111111111111111111111").is_ok());
        for bad in [
            "unvalidated12345",
            "",
            "7656",
            "12345678901234567",
            "76561/../x",
            "76561198098770013/teams",
            "76561198098770013 ",
        ] {
            let err = validate_steam_id(bad).unwrap_err();
            assert!(err.is_validation(), "{bad}");
        }
    }

    #[tokio::test]
    async fn test_get_player() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profile/76561198098770013"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(player_json("76561198098770013", "Captain Zidgel")),
            )
            .expect(2)
            .mount(&server)
            .await;
        let transport = transport(&server);

        let player = get_player(&transport, "76561198098770013").await.unwrap();
        assert_eq!(player.name, "Captain Zidgel");
        assert!(player.ban.is_none());
        assert_eq!(
            player.current_teams.get(Format::Highlander).map(|t| t.id),
            Some(12001)
        );

        let again = get_player(&transport, "76561198098770013").await.unwrap();
        assert_eq!(player, again);
    }

    #[tokio::test]
    async fn test_get_player_rejects_prefix_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let transport = transport(&server);

        let err = get_player(&transport, "unvalidated12345").await.unwrap_err();
        assert!(matches!(err, RglError::InvalidSteamId { ref id, .. } if id == "unvalidated12345"));
    }

    #[tokio::test]
    async fn test_get_player_path_traversal_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams/5979"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(player_json("76561198098770013", "wrong")),
            )
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(player_json("0", "wrong")))
            .expect(0)
            .mount(&server)
            .await;
        let transport = transport(&server);

        for id in ["76561/../x", "76561/../../teams/5979"] {
            let err = get_player(&transport, id).await.unwrap_err();
            assert!(matches!(err, RglError::InvalidSteamId { id: ref got, .. } if got == id));
        }
    }

    #[tokio::test]
    async fn test_team_history_keeps_id_in_one_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/x"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "teamId": 1 }])))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/profile/76561%2F..%2F..%2Fx/teams"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        let transport = transport(&server);

        let history = get_player_team_history(&transport, "76561/../../x").await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_get_player_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profile/7656111111111111111111111111"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "statusCode": 404,
                "message": "Not Found"
            })))
            .mount(&server)
            .await;
        let transport = transport(&server);

        let player = get_player(&transport, "7656111111111111111111111111").await.unwrap();
        assert_eq!(player, Player::default());
    }

    #[tokio::test]
    async fn test_team_history_not_found_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profile/765611980987700133/teams"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        let transport = transport(&server);

        let history = get_player_team_history(&transport, "765611980987700133").await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_team_history() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profile/76561198098770013/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "formatId": 3,
                    "formatName": "Sixes",
                    "regionId": 40,
                    "regionName": "NA Sixes",
                    "seasonId": 67,
                    "seasonName": "Sixes S2",
                    "startedAt": "2020-01-07T11:52:14.640Z",
                    "divisionId": 363,
                    "divisionName": "Intermediate",
                    "leftAt": null,
                    "teamName": "nut.city",
                    "teamTag": "nut.",
                    "teamId": 5979,
                    "stats": {
                        "wins": 9, "winsWithout": 2, "loses": 7,
                        "losesWithout": 4, "gamesPlayed": 16, "gamesWithout": 6
                    }
                }
            ])))
            .mount(&server)
            .await;
        let transport = transport(&server);

        let history = get_player_team_history(&transport, "76561198098770013").await.unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].is_current());
        assert_eq!(history[0].team_id, 5979);
    }

    #[tokio::test]
    async fn test_bulk_players_omits_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/profile/getmany"))
            .and(body_json(serde_json::json!([
                "76561198098770013",
                "76561197970669109",
                "765611980987700133"
            ])))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                player_json("76561198098770013", "Captain Zidgel"),
                player_json("76561197970669109", "b4nny"),
            ])))
            .mount(&server)
            .await;
        let transport = transport(&server);

        let players = bulk_players(
            &transport,
            &["76561198098770013", "76561197970669109", "765611980987700133"],
        )
        .await
        .unwrap();
        let ids: Vec<_> = players.iter().map(|p| p.steam_id.as_str()).collect();
        assert_eq!(ids, ["76561198098770013", "76561197970669109"]);
    }

    #[tokio::test]
    async fn test_bulk_players_not_found_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/profile/getmany"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        let transport = transport(&server);

        let players = bulk_players(&transport, &[String::from("76561198292350104")])
            .await
            .unwrap();
        assert!(players.is_empty());
    }

    #[tokio::test]
    async fn test_bulk_players_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/profile/getmany"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "statusCode": 400,
                "error": "Bad Request",
                "message": [{ "code": "invalid_string", "message": "Invalid steam id" }]
            })))
            .mount(&server)
            .await;
        let transport = transport(&server);

        let err = bulk_players(&transport, &["not-an-id"]).await.unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err,
            RglError::Remote { kind: RemoteErrorKind::MalformedSteamId, .. }
        ));
    }
}
