use super::*;

/// Mounts the ADS responses for a main library and a non-article library.
async fn mount_libraries(server: &MockServer) {
  Mock::given(method("GET"))
    .and(path("/v1/biblib/libraries/papers"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "documents": ["2023ApJ...900...50Y", "2023arXiv230100001Y", "2022MNRAS.500.1234D"],
      "metadata": { "num_documents": 3 }
    })))
    .mount(server)
    .await;

  Mock::given(method("GET"))
    .and(path("/v1/biblib/libraries/nonpapers"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "documents": ["2021zndo...1234567Y"],
      "metadata": { "num_documents": 1 }
    })))
    .mount(server)
    .await;

  Mock::given(method("POST"))
    .and(path("/v1/metrics"))
    .and(body_json(json!({
      "bibcodes": ["2023ApJ...900...50Y", "2023arXiv230100001Y", "2022MNRAS.500.1234D"]
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "citation stats": { "number of citing papers": 120 },
      "indicators": { "h": 5 }
    })))
    .mount(server)
    .await;

  Mock::given(method("POST"))
    .and(path("/v1/search/bigquery"))
    .and(query_param("rows", "3"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "response": { "docs": [
        {
          "bibcode": "2023ApJ...900...50Y",
          "title": ["H-AMR: \"Hot\" Accretion onto $1.4$ M$_\\odot$ Stars"],
          "author": [
            "Yarza, Ricardo", "Razo-López, Nicolás Bautista", "Doe, Jane",
            "Roe, Richard", "Poe, Edgar Allan", "Kotten, Ben"
          ],
          "pub": "The Astrophysical Journal",
          "bibstem": ["ApJ", "ApJ...900"],
          "year": "2023",
          "volume": "900",
          "issue": "1",
          "page": ["50"],
          "doctype": "article"
        },
        {
          "bibcode": "2023arXiv230100001Y",
          "title": ["A Preprint"],
          "author": ["Yarza, Ricardo", "Doe, Jane"],
          "pub": "arXiv e-prints",
          "bibstem": ["arXiv"],
          "year": "2023",
          "page": ["arXiv:2301.00001"],
          "doctype": "eprint"
        },
        {
          "bibcode": "2022MNRAS.500.1234D",
          "title": ["Someone Else's Paper"],
          "author": ["Doe, Jane", "Roe, Richard", "Poe, Edgar", "Moe, Sam", "Foe, Al", "Yarza, Ricardo"],
          "pub": "Monthly Notices of the Royal Astronomical Society",
          "bibstem": ["MNRAS", "MNRAS.500"],
          "year": 2022,
          "volume": "500",
          "page": ["1234"],
          "doctype": "article"
        }
      ] }
    })))
    .mount(server)
    .await;

  Mock::given(method("POST"))
    .and(path("/v1/search/bigquery"))
    .and(query_param("rows", "1"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "response": { "docs": [
        {
          "bibcode": "2021zndo...1234567Y",
          "title": ["vitae: CV fragments"],
          "author": ["Yarza, Ricardo"],
          "pub": "Zenodo",
          "bibstem": ["zndo"],
          "year": "2021",
          "page": ["10.5281/zenodo.1234567"],
          "doctype": "software"
        }
      ] }
    })))
    .mount(server)
    .await;
}

fn config(server: &MockServer, output: &TempDir) -> Config {
  let mut config = Config::default();
  config.api.base_url = format!("{}/v1", server.uri());
  config.libraries.papers = "papers".into();
  config.libraries.nonpapers = Some("nonpapers".into());
  config.output.directory = output.path().join("data");
  config
}

#[traced_test]
#[tokio::test]
async fn test_update_writes_all_fragments() -> TestResult<()> {
  let (server, client) = mock_ads().await;
  mount_libraries(&server).await;
  let output = tempdir()?;
  let config = config(&server, &output);

  let curriculum = Curriculum::build(&client, &config).await?;
  let written = curriculum.write_to(&config.output.directory)?;
  assert_eq!(written.len(), 4);
  // Two library listings, one metrics request, two record lookups
  assert_eq!(server.received_requests().await.map(|r| r.len()), Some(5));

  let read = |name: &str| std::fs::read_to_string(config.output.directory.join(name)).unwrap();

  assert_eq!(
    read("papers.tex"),
    concat!(
      r"\item \textbf{Yarza, R.}, \underline{Razo-López, N.~B.}, Doe, J., Roe, R., et al. 2023, ",
      r"\href{https://ui.adsabs.harvard.edu/abs/2023ApJ...900...50Y}{ApJ, 900, 50}",
      r"\\\textit{H-AMR\@: ``Hot'' Accretion onto \( \qty{1.4}{\solarmass} \) Stars}",
      "\n\n",
      r"\item Doe, J., Roe, R., Poe, E., Moe, S., et al.\ incl.\ \textbf{Yarza, R.} 2022, ",
      r"\href{https://ui.adsabs.harvard.edu/abs/2022MNRAS.500.1234D}{MNRAS, 500, 1234}",
      r"\\\textit{Someone Else's Paper}",
      "\n\n",
    )
  );

  assert_eq!(
    read("preprints.tex"),
    concat!(
      r"\item \textbf{Yarza, R.}, \& Doe, J. 2023, ",
      r"\href{https://ui.adsabs.harvard.edu/abs/2023arXiv230100001Y}{arXiv:\allowbreak 2301.00001}",
      r"\\\textit{A Preprint}",
      "\n\n",
    )
  );

  assert_eq!(read("metrics.tex"), "2 first-author, 120 citations, h-index 5");

  assert_eq!(
    read("nonpapers.tex"),
    concat!(
      r"\item \textbf{Yarza, R.} 2021, ",
      r"\href{https://ui.adsabs.harvard.edu/abs/2021zndo...1234567Y}{Zenodo, 10.5281/zenodo.1234567}",
      r"\\\textit{vitae: CV fragments}",
      "\n\n",
    )
  );
  Ok(())
}

#[tokio::test]
async fn test_library_load_is_fetch_once() -> TestResult<()> {
  let (server, client) = mock_ads().await;
  mount_libraries(&server).await;

  let library = Library::load_with_metrics(&client, "papers").await?;
  assert_eq!(library.records.len(), 3);
  assert_eq!(library.metrics.map(|m| m.h_index), Some(5));

  // Reading the loaded library again makes no further requests
  let articles = library.records.iter().filter(|r| r.doctype == DocType::Article).count();
  assert_eq!(articles, 2);
  let received = server.received_requests().await.unwrap_or_default();
  assert_eq!(received.len(), 3);
  Ok(())
}

#[tokio::test]
async fn test_unreachable_service_fails_the_run() {
  // Grab a free port and release it so nothing is listening there
  let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
  let output = tempdir().unwrap();
  let mut config = Config::default();
  config.api.base_url = format!("http://127.0.0.1:{port}/v1");
  config.output.directory = output.path().join("data");

  let client =
    AdsClient::new(&config.api.base_url, &Token::from(TOKEN), Duration::from_secs(2)).unwrap();
  let err = Curriculum::build(&client, &config).await.unwrap_err();
  assert!(matches!(err, VitaeError::Network(_)), "unexpected error: {err}");
  assert!(!config.output.directory.exists());
}
