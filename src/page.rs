//! The single HTML page served at `/`.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Professional Profile Picture Editor</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: #111827;
            color: #f3f4f6;
            min-height: 100vh;
            padding: 32px 16px;
        }

        .container {
            max-width: 1100px;
            margin: 0 auto;
        }

        header {
            text-align: center;
            margin-bottom: 32px;
        }

        h1 {
            font-size: 2.6em;
            font-weight: 800;
            background: linear-gradient(90deg, #60a5fa, #4f46e5);
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
        }

        .subtitle {
            color: #9ca3af;
            margin-top: 12px;
            font-size: 1.1em;
        }

        .upload-area {
            max-width: 640px;
            margin: 0 auto;
            border: 2px dashed #4b5563;
            border-radius: 16px;
            background: #1f2937;
            padding: 80px 20px;
            text-align: center;
            cursor: pointer;
            transition: border-color 0.3s;
        }

        .upload-area:hover,
        .upload-area.dragover {
            border-color: #3b82f6;
        }

        .upload-icon {
            font-size: 3.5em;
            margin-bottom: 16px;
        }

        .upload-text {
            font-size: 1.5em;
            font-weight: 700;
        }

        .upload-hint {
            color: #9ca3af;
            margin-top: 8px;
        }

        input[type="file"] {
            display: none;
        }

        .workspace {
            display: none;
        }

        .panes {
            position: relative;
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
            gap: 32px;
        }

        .pane {
            background: #1f2937;
            border-radius: 12px;
            padding: 16px;
            text-align: center;
        }

        .pane h3 {
            color: #d1d5db;
            margin-bottom: 16px;
        }

        .frame {
            aspect-ratio: 1 / 1;
            background: #374151;
            border-radius: 8px;
            overflow: hidden;
            display: flex;
            align-items: center;
            justify-content: center;
            color: #6b7280;
        }

        .frame img {
            width: 100%;
            height: 100%;
            object-fit: cover;
        }

        .loading {
            position: absolute;
            inset: 0;
            background: rgba(31, 41, 55, 0.85);
            border-radius: 12px;
            display: none;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            z-index: 20;
        }

        .spinner {
            width: 56px;
            height: 56px;
            border: 4px solid #60a5fa;
            border-top-color: transparent;
            border-radius: 50%;
            animation: spin 1s linear infinite;
            margin-bottom: 16px;
        }

        @keyframes spin {
            0% { transform: rotate(0deg); }
            100% { transform: rotate(360deg); }
        }

        .options {
            display: flex;
            flex-wrap: wrap;
            gap: 24px;
            justify-content: center;
            align-items: center;
            margin-top: 24px;
            color: #d1d5db;
        }

        select {
            background: #374151;
            color: #f3f4f6;
            border: 1px solid #4b5563;
            border-radius: 8px;
            padding: 8px 12px;
            margin-left: 8px;
        }

        .actions {
            display: flex;
            flex-wrap: wrap;
            gap: 16px;
            justify-content: center;
            margin-top: 32px;
        }

        .btn {
            border: none;
            border-radius: 8px;
            padding: 14px 32px;
            font-size: 1.1em;
            font-weight: 700;
            color: white;
            cursor: pointer;
            text-decoration: none;
        }

        .btn-primary { background: #4f46e5; }
        .btn-primary:disabled { background: #312e81; color: #9ca3af; cursor: not-allowed; }
        .btn-download { background: #16a34a; display: none; }
        .btn-secondary { background: #374151; color: #d1d5db; font-weight: 600; }

        .error {
            max-width: 900px;
            margin: 0 auto 24px;
            background: #7f1d1d;
            border: 1px solid #b91c1c;
            color: #fecaca;
            padding: 12px 16px;
            border-radius: 8px;
            display: none;
        }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Professional Profile Picture Editor</h1>
            <p class="subtitle">Upload your photo and let AI create a polished, LinkedIn-ready version while keeping you looking natural and recognizable.</p>
        </header>

        <div class="error" id="error"></div>

        <div class="upload-area" id="uploadArea">
            <div class="upload-icon">📸</div>
            <div class="upload-text">Upload Your Photo</div>
            <div class="upload-hint">Drag and drop or click to select a file.</div>
            <input type="file" id="fileInput" accept="image/*">
        </div>

        <div class="workspace" id="workspace">
            <div class="panes">
                <div class="loading" id="loading">
                    <div class="spinner"></div>
                    <p id="loadingMessage">Polishing your photo...</p>
                </div>
                <div class="pane">
                    <h3>Before</h3>
                    <div class="frame"><img id="originalImage" alt="Original"></div>
                </div>
                <div class="pane">
                    <h3>After</h3>
                    <div class="frame" id="editedFrame">Your enhanced photo will appear here</div>
                </div>
            </div>

            <div class="options">
                <label>Background
                    <select id="backgroundStyle">
                        <option>AI Choice</option>
                        <option>Office</option>
                        <option>Modern</option>
                        <option>Textured</option>
                    </select>
                </label>
                <label><input type="checkbox" id="adjustBrightness" checked> Adjust brightness</label>
                <label><input type="checkbox" id="smoothSkin" checked> Smooth skin</label>
            </div>

            <div class="actions">
                <button class="btn btn-primary" id="enhanceButton">✨ Enhance Photo</button>
                <a class="btn btn-download" id="downloadLink" download="professional_profile_picture.png">Download</a>
                <button class="btn btn-secondary" id="resetButton">Upload Another</button>
            </div>
        </div>
    </div>

    <script>
        const messages = [
            "Polishing your photo...",
            "Adjusting brightness and contrast...",
            "Smoothing skin tones naturally...",
            "Minimizing flyaways...",
            "Creating a professional background...",
            "Applying the finishing touches...",
        ];

        const uploadArea = document.getElementById('uploadArea');
        const fileInput = document.getElementById('fileInput');
        const workspace = document.getElementById('workspace');
        const originalImage = document.getElementById('originalImage');
        const editedFrame = document.getElementById('editedFrame');
        const loading = document.getElementById('loading');
        const loadingMessage = document.getElementById('loadingMessage');
        const enhanceButton = document.getElementById('enhanceButton');
        const downloadLink = document.getElementById('downloadLink');
        const resetButton = document.getElementById('resetButton');
        const errorDiv = document.getElementById('error');

        let originalFile = null;
        let messageTimer = null;

        function showError(message) {
            errorDiv.textContent = 'Error: ' + message;
            errorDiv.style.display = message ? 'block' : 'none';
        }

        function clearResult() {
            editedFrame.textContent = 'Your enhanced photo will appear here';
            downloadLink.style.display = 'none';
            downloadLink.removeAttribute('href');
        }

        function selectFile(file) {
            if (!file.type.startsWith('image/')) {
                showError('Please upload a valid image file (PNG, JPG, etc.).');
                return;
            }
            originalFile = file;
            originalImage.src = URL.createObjectURL(file);
            clearResult();
            showError('');
            uploadArea.style.display = 'none';
            workspace.style.display = 'block';
        }

        function setLoading(active) {
            enhanceButton.disabled = active;
            enhanceButton.textContent = active ? 'Enhancing...' : '✨ Enhance Photo';
            loading.style.display = active ? 'flex' : 'none';
            clearInterval(messageTimer);
            if (active) {
                let index = 0;
                loadingMessage.textContent = messages[0];
                messageTimer = setInterval(() => {
                    index = (index + 1) % messages.length;
                    loadingMessage.textContent = messages[index];
                }, 2500);
            }
        }

        uploadArea.addEventListener('click', () => fileInput.click());

        uploadArea.addEventListener('dragover', (e) => {
            e.preventDefault();
            uploadArea.classList.add('dragover');
        });

        uploadArea.addEventListener('dragleave', () => {
            uploadArea.classList.remove('dragover');
        });

        uploadArea.addEventListener('drop', (e) => {
            e.preventDefault();
            uploadArea.classList.remove('dragover');
            const file = e.dataTransfer.files[0];
            if (file) {
                selectFile(file);
            }
        });

        fileInput.addEventListener('change', (e) => {
            const file = e.target.files[0];
            if (file) {
                selectFile(file);
            }
        });

        enhanceButton.addEventListener('click', async () => {
            if (!originalFile) return;

            setLoading(true);
            showError('');
            clearResult();

            const formData = new FormData();
            formData.append('image', originalFile);
            formData.append('background_style', document.getElementById('backgroundStyle').value);
            formData.append('adjust_brightness', document.getElementById('adjustBrightness').checked);
            formData.append('smooth_skin', document.getElementById('smoothSkin').checked);

            try {
                const response = await fetch('/enhance', {
                    method: 'POST',
                    body: formData
                });
                const result = await response.json();

                if (!response.ok) {
                    throw new Error(result.error ? result.error.message : 'An unknown error occurred.');
                }

                const img = document.createElement('img');
                img.src = result.image;
                img.alt = 'Edited';
                editedFrame.replaceChildren(img);
                downloadLink.href = result.image;
                downloadLink.style.display = 'inline-block';
            } catch (error) {
                showError(error.message);
                console.error(error);
            } finally {
                setLoading(false);
            }
        });

        resetButton.addEventListener('click', () => {
            originalFile = null;
            fileInput.value = '';
            originalImage.removeAttribute('src');
            clearResult();
            showError('');
            setLoading(false);
            workspace.style.display = 'none';
            uploadArea.style.display = 'block';
        });
    </script>
</body>
</html>
"#;
