use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::setup_test_client;
use graph_models::{
    AssignmentTargetKind, DeviceConfiguration, DeviceConfigurationKind, GraphError,
    MacOsWiFiConfiguration, QueryParameters, WiFiSecurityType,
};

const COLLECTION: &str = "/beta/deviceManagement/deviceConfigurations";

#[tokio::test]
async fn test_list_device_configurations() {
    // What it tests: Listing sends the OData query options and decodes each item into
    // the variant named by its `@odata.type`.
    //
    // Why it's valuable: A page routinely mixes profile types, and callers match on the
    // variant to reach type-specific settings.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .and(query_param("$select", "id,displayName,ssid"))
        .and(query_param("$filter", "startswith(displayName,'Corp')"))
        .and(query_param("$top", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.count": 2,
            "value": [
                {
                    "@odata.type": "#microsoft.graph.macOSWiFiConfiguration",
                    "id": "cfg-1",
                    "displayName": "Corp macOS",
                    "ssid": "Corp",
                    "wiFiSecurityType": "wpa2Personal"
                },
                {
                    "@odata.type": "#microsoft.graph.iosEnterpriseWiFiConfiguration",
                    "id": "cfg-2",
                    "displayName": "Corp iOS",
                    "ssid": "Corp-EAP",
                    "eapType": "peap"
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let query = QueryParameters::new()
        .select(["id", "displayName", "ssid"])
        .filter("startswith(displayName,'Corp')")
        .top(2);
    let page = client.device_configurations().list(&query).await.unwrap();

    assert_eq!(page.odata_count, Some(2));
    assert_eq!(page.odata_next_link, None);
    assert_eq!(page.value.len(), 2);

    match &page.value[0] {
        DeviceConfigurationKind::MacOsWiFi(wifi) => {
            assert_eq!(wifi.ssid.as_deref(), Some("Corp"));
            assert_eq!(wifi.wi_fi_security_type, Some(WiFiSecurityType::Wpa2Personal));
        }
        other => panic!("expected MacOsWiFi, got {other:?}"),
    }
    match &page.value[1] {
        DeviceConfigurationKind::IosEnterpriseWiFi(wifi) => {
            assert_eq!(wifi.wifi.ssid.as_deref(), Some("Corp-EAP"));
            assert_eq!(wifi.wifi.configuration.display_name.as_deref(), Some("Corp iOS"));
        }
        other => panic!("expected IosEnterpriseWiFi, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_all_follows_next_links() {
    // What it tests: `list_all` keeps requesting `@odata.nextLink` until a page comes
    // back without one, and concatenates the items in order.
    let mock_server = MockServer::start().await;
    let next_link = format!("{}{COLLECTION}?$skiptoken=page2", mock_server.uri());

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .and(query_param_is_missing("$skiptoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.nextLink": next_link,
            "value": [
                { "@odata.type": "#microsoft.graph.macOSWiFiConfiguration", "id": "cfg-1" },
                { "@odata.type": "#microsoft.graph.macOSCustomConfiguration", "id": "cfg-2" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .and(query_param("$skiptoken", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                { "@odata.type": "#microsoft.graph.windows10GeneralConfiguration", "id": "cfg-3" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let profiles = client
        .device_configurations()
        .list_all(&QueryParameters::new())
        .await
        .unwrap();

    assert_eq!(
        profiles.iter().map(|p| p.id().unwrap()).collect::<Vec<_>>(),
        vec!["cfg-1", "cfg-2", "cfg-3"]
    );
    assert!(matches!(profiles[1], DeviceConfigurationKind::MacOsCustom(_)));
    assert!(matches!(profiles[2], DeviceConfigurationKind::Base(_)));
}

#[tokio::test]
async fn test_list_all_refuses_next_link_to_another_host() {
    // What it tests: A next link pointing at a different origin is rejected with
    // InvalidEndpoint, and nothing is sent to that origin.
    //
    // Why it's valuable: Every request carries the bearer token, so following a link
    // off the service would hand the token to whoever the page names.
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;
    let foreign_link = format!("{}{COLLECTION}?$skiptoken=page2", other_server.uri());

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.nextLink": foreign_link,
            "value": [{ "@odata.type": "#microsoft.graph.macOSWiFiConfiguration", "id": "cfg-1" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": [] })))
        .expect(0)
        .mount(&other_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    match client.device_configurations().list_all(&QueryParameters::new()).await {
        Err(GraphError::InvalidEndpoint(link)) => assert_eq!(link, foreign_link),
        other => panic!("expected InvalidEndpoint, got {other:?}"),
    }

    let requests = other_server.received_requests().await.expect("failed to read recorded requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_list_all_stops_when_next_links_cycle() {
    // What it tests: Paging ends once a next link names a page that was already fetched,
    // with each page requested exactly once.
    let mock_server = MockServer::start().await;
    let first_page = format!("{}{COLLECTION}", mock_server.uri());
    let second_page = format!("{first_page}?$skiptoken=page2");

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .and(query_param_is_missing("$skiptoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.nextLink": second_page,
            "value": [{ "@odata.type": "#microsoft.graph.macOSWiFiConfiguration", "id": "cfg-1" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .and(query_param("$skiptoken", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.nextLink": first_page,
            "value": [{ "@odata.type": "#microsoft.graph.iosWiFiConfiguration", "id": "cfg-2" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let profiles = client
        .device_configurations()
        .list_all(&QueryParameters::new())
        .await
        .unwrap();

    assert_eq!(
        profiles.iter().map(|p| p.id().unwrap()).collect::<Vec<_>>(),
        vec!["cfg-1", "cfg-2"]
    );
}

#[tokio::test]
async fn test_get_device_configuration_with_expanded_assignments() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION}/cfg-1")))
        .and(query_param("$expand", "assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.type": "#microsoft.graph.macOSEnterpriseWiFiConfiguration",
            "id": "cfg-1",
            "ssid": "Corp",
            "authenticationMethod": "certificate",
            "assignments": [
                {
                    "id": "assign-1",
                    "target": { "@odata.type": "#microsoft.graph.allDevicesAssignmentTarget" }
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let profile = client
        .device_configurations()
        .get("cfg-1", &QueryParameters::new().expand(["assignments"]))
        .await
        .unwrap();

    let DeviceConfigurationKind::MacOsEnterpriseWiFi(enterprise) = &profile else {
        panic!("expected MacOsEnterpriseWiFi, got {profile:?}");
    };
    assert_eq!(enterprise.wifi.ssid.as_deref(), Some("Corp"));

    let assignments = profile.configuration().assignments.as_ref().unwrap();
    assert_eq!(assignments.len(), 1);
    assert!(matches!(assignments[0].target, Some(AssignmentTargetKind::AllDevices(_))));
}

#[tokio::test]
async fn test_get_missing_device_configuration() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION}/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": "ResourceNotFound", "message": "Resource not found" }
        })))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let err = client
        .device_configurations()
        .get("missing", &QueryParameters::new())
        .await
        .unwrap_err();

    assert!(
        matches!(err, GraphError::ApiError { status: 404, ref code, .. } if code == "ResourceNotFound"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_create_device_configuration() {
    // What it tests: Create posts only the present fields, including the discriminator
    // preset by the constructor, and decodes the stored profile from the response.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .and(body_json(json!({
            "@odata.type": "#microsoft.graph.macOSWiFiConfiguration",
            "displayName": "Corp Wi-Fi",
            "ssid": "Corp",
            "wiFiSecurityType": "wpa2Personal",
            "connectAutomatically": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "@odata.type": "#microsoft.graph.macOSWiFiConfiguration",
            "id": "cfg-new",
            "displayName": "Corp Wi-Fi",
            "ssid": "Corp",
            "wiFiSecurityType": "wpa2Personal",
            "connectAutomatically": true,
            "version": 1,
            "createdDateTime": "2024-03-01T08:30:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut profile = MacOsWiFiConfiguration::new();
    profile.configuration.display_name = Some("Corp Wi-Fi".to_string());
    profile.ssid = Some("Corp".to_string());
    profile.wi_fi_security_type = Some(WiFiSecurityType::Wpa2Personal);
    profile.connect_automatically = Some(true);

    let client = setup_test_client(&mock_server.uri());
    let created = client.device_configurations().create(&profile).await.unwrap();

    assert_eq!(created.id(), Some("cfg-new"));
    assert_eq!(created.configuration().version, Some(1));
    assert_eq!(
        created.configuration().created_date_time.map(|t| t.to_rfc3339()),
        Some("2024-03-01T08:30:00+00:00".to_string())
    );
    assert!(matches!(created, DeviceConfigurationKind::MacOsWiFi(_)));
}

#[tokio::test]
async fn test_create_without_response_body_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let err = client
        .device_configurations()
        .create(&MacOsWiFiConfiguration::new())
        .await
        .unwrap_err();
    assert!(matches!(err, GraphError::EmptyResponse), "got {err:?}");
}

#[tokio::test]
async fn test_update_sends_only_present_fields() {
    // What it tests: A PATCH built from an untagged base record carries exactly the
    // fields that were set, and a 204 reply maps to `None`.
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("{COLLECTION}/cfg-1")))
        .and(body_json(json!({ "displayName": "Renamed", "roleScopeTagIds": ["0", "7"] })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut changes = DeviceConfiguration::new();
    changes.display_name = Some("Renamed".to_string());
    changes.role_scope_tag_ids = Some(vec!["0".to_string(), "7".to_string()]);

    let client = setup_test_client(&mock_server.uri());
    let updated = client.device_configurations().update("cfg-1", &changes).await.unwrap();
    assert_eq!(updated, None);
}

#[tokio::test]
async fn test_delete_device_configuration() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{COLLECTION}/cfg-1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    client.device_configurations().delete("cfg-1").await.unwrap();
}

#[tokio::test]
async fn test_list_assignments() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION}/cfg-1/assignments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                {
                    "@odata.type": "#microsoft.graph.deviceConfigurationAssignment",
                    "id": "assign-1",
                    "intent": "apply",
                    "source": "direct",
                    "target": {
                        "@odata.type": "#microsoft.graph.groupAssignmentTarget",
                        "groupId": "group-a",
                        "deviceAndAppManagementAssignmentFilterType": "none"
                    }
                },
                {
                    "@odata.type": "#microsoft.graph.deviceConfigurationAssignment",
                    "id": "assign-2",
                    "target": { "@odata.type": "#microsoft.graph.allLicensedUsersAssignmentTarget" }
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let page = client.device_configurations().assignments("cfg-1").await.unwrap();

    assert_eq!(page.value.len(), 2);
    let first = &page.value[0];
    assert_eq!(first.entity.id.as_deref(), Some("assign-1"));
    assert_eq!(first.target.as_ref().and_then(AssignmentTargetKind::group_id), Some("group-a"));
    assert!(matches!(
        page.value[1].target,
        Some(AssignmentTargetKind::AllLicensedUsers(_))
    ));
}
